//! # Issue
//!
//! Represents an issue record: YAML frontmatter metadata plus a Markdown
//! title and body.
//!
//! The issue's status (open/closed) is deliberately *not* part of the record.
//! Status is encoded purely by which directory holds the file, and the store
//! returns it alongside the parsed record so the two can never fall out of
//! sync.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod codec;
pub mod slug;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use self::slug::slugify;
use crate::constants::{CLOSED_DIR, ISSUE_FILE_EXTENSION, OPEN_DIR};

/// Issue status, derived from the directory holding the issue file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Status {
    #[default]
    Open,
    Closed,
}

impl Status {
    /// Returns the status directory name inside `.issues/`.
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Open => OPEN_DIR,
            Self::Closed => CLOSED_DIR,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// YAML frontmatter for an issue.
///
/// All fields are always written, even when empty, so the on-disk format
/// stays uniform and grep-friendly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Zero-padded decimal ID, unique across both status directories
    pub id: String,

    /// Assignee name; empty means unassigned
    #[serde(default)]
    pub assignee: String,

    /// Labels in insertion order (no uniqueness enforced)
    #[serde(default)]
    pub labels: Vec<String>,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,

    /// Last-mutation timestamp (UTC); refreshed on every edit or move
    pub updated: DateTime<Utc>,
}

/// A complete issue: frontmatter plus title and body from the Markdown part.
#[derive(Debug, Clone)]
pub struct Issue {
    /// YAML frontmatter
    pub frontmatter: Frontmatter,

    /// Title, sourced from the first `# ` heading (never stored in frontmatter)
    pub title: String,

    /// Markdown body following the title heading
    pub body: String,
}

impl Issue {
    /// Creates a new issue with `created == updated == now`.
    pub fn new(id: String, title: String, assignee: String, labels: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            frontmatter: Frontmatter {
                id,
                assignee,
                labels,
                created: now,
                updated: now,
            },
            title,
            body: String::new(),
        }
    }

    /// Returns the ID
    pub fn id(&self) -> &str {
        &self.frontmatter.id
    }

    /// Returns the assignee ("" when unassigned)
    pub fn assignee(&self) -> &str {
        &self.frontmatter.assignee
    }

    /// Returns the labels
    pub fn labels(&self) -> &[String] {
        &self.frontmatter.labels
    }

    /// Returns the creation timestamp
    pub const fn created(&self) -> DateTime<Utc> {
        self.frontmatter.created
    }

    /// Returns the last-mutation timestamp
    pub const fn updated(&self) -> DateTime<Utc> {
        self.frontmatter.updated
    }

    /// Checks whether the issue carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        self.frontmatter.labels.iter().any(|l| l == label)
    }

    /// Refreshes the `updated` timestamp to now.
    pub fn touch(&mut self) {
        self.frontmatter.updated = Utc::now();
    }

    /// Returns the filename assigned at creation time: `{id}-{slug}.md`.
    ///
    /// Only valid for issues that have never been saved; once a file exists,
    /// the store reuses its name verbatim regardless of title changes.
    pub fn initial_filename(&self) -> String {
        format!(
            "{}-{}.{ISSUE_FILE_EXTENSION}",
            self.frontmatter.id,
            slugify(&self.title)
        )
    }
}
