//! # View Command
//!
//! Opens an issue file in the system's default program (e.g., Typora,
//! VS Code, Obsidian).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::process::Command;

use anyhow::{Context, Result};

use super::open_repo;
use crate::{storage::normalize_id, ui};

/// Executes the view command.
pub fn execute(id: &str) -> Result<()> {
    let repo = open_repo()?;
    let id = normalize_id(id);

    let (path, _) = repo.find_issue_file(&id)?;

    let opener = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "linux") {
        "xdg-open"
    } else {
        anyhow::bail!("unsupported platform for 'gi view'");
    };

    // Non-blocking: hand the file to the desktop and return
    Command::new(opener)
        .arg(&path)
        .spawn()
        .context("failed to open file")?;

    ui::print_success(&format!("Opened issue #{id} in default program"));

    Ok(())
}
