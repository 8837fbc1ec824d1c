//! # git-issue
//!
//! A lightweight issue tracker that stores issues as Markdown files with
//! YAML frontmatter inside your repository.
//!
//! Issues live under `.issues/`, split into `open/` and `closed/`
//! directories — an issue's status *is* its directory. Files are plain
//! Markdown, making them human-readable, grep-friendly, and diffable.
//!
//! ## Features
//!
//! - **Markdown Storage**: YAML frontmatter (id, assignee, labels,
//!   timestamps) plus a free-form Markdown body
//! - **Stable Filenames**: `{id}-{slug}.md`, assigned once at creation and
//!   never renamed, even when the title changes
//! - **Collision-Safe IDs**: sequential zero-padded IDs, verified against
//!   the filesystem before every allocation
//! - **Git Integration**: optional auto-commit of issue mutations
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod error;
pub mod issue;
pub mod storage;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::{Error, Result};
pub use issue::{slugify, Frontmatter, Issue, Status};
pub use storage::{format_id, normalize_id, Repository};
