//! # Errors
//!
//! Typed errors for the storage and lifecycle layer.
//!
//! Commands wrap these in `anyhow` for display; the variants exist so that
//! callers (and tests) can tell a missing issue from a malformed one or a
//! status conflict apart without string matching.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use crate::issue::Status;

/// Result alias for storage-layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the repository store, codec, and ID allocator.
#[derive(Debug, Error)]
pub enum Error {
    /// Issue ID does not match any file in either status directory.
    #[error("issue {0} not found")]
    NotFound(String),

    /// Content violates the Markdown + YAML frontmatter contract.
    #[error("invalid issue format: {0}")]
    Format(String),

    /// Save target contradicts the issue's actual location.
    #[error("issue {id} exists in {actual} directory, cannot save to {requested}")]
    SaveConflict {
        id: String,
        actual: Status,
        requested: Status,
    },

    /// Move source contradicts the issue's actual location.
    #[error("issue {id} is in {actual}, not {expected}")]
    MoveConflict {
        id: String,
        actual: Status,
        expected: Status,
    },

    /// No-op status transition (close a closed issue, reopen an open one).
    #[error("issue #{id} is already {status}")]
    AlreadyInStatus { id: String, status: Status },

    /// Counter file is unreadable or does not hold a decimal integer.
    #[error("corrupt counter file: {0}")]
    CorruptCounter(String),

    /// Filesystem operation failed for environmental reasons.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wraps an I/O error with a human-readable context string.
    pub fn io(context: impl Into<String>) -> impl FnOnce(std::io::Error) -> Self {
        let context = context.into();
        move |source| Self::Io { context, source }
    }

    /// Returns true for the not-found variant.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
