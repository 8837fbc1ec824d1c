//! # Git Integration
//!
//! Detects git repositories and commits `.issues` changes on request.
//!
//! The core never requires git; commands call [`commit_changes`] only after
//! a mutation has already succeeded, and report failures without undoing
//! anything.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

/// Checks if the current directory is inside a git repository.
pub fn is_git_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Stages the issues directory and commits with the given message.
pub fn commit_changes(message: &str, issues_path: &Path) -> Result<()> {
    if !is_git_repo() {
        anyhow::bail!("not a git repository");
    }

    let status = Command::new("git")
        .args(["add", &issues_path.to_string_lossy()])
        .stdout(Stdio::null())
        .status()
        .context("Failed to execute git add")?;
    if !status.success() {
        anyhow::bail!("failed to stage changes");
    }

    let status = Command::new("git")
        .args(["commit", "-m", message])
        .stdout(Stdio::null())
        .status()
        .context("Failed to execute git commit")?;
    if !status.success() {
        anyhow::bail!("failed to commit");
    }

    Ok(())
}
