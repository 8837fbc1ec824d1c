//! # Editor Integration
//!
//! Launches the user's preferred editor for editing issue files.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io::IsTerminal, path::Path, process::Command};

use anyhow::{Context, Result};

use crate::config::Config;

/// Opens a file in the user's configured editor and blocks until it exits.
///
/// The editor is determined by (in order of priority):
/// 1. `editor` setting in `~/.config/git-issue/config`
/// 2. `$VISUAL` environment variable
/// 3. `$EDITOR` environment variable
/// 4. Fallback to `vim`
///
/// The editor is only launched if stdout is a terminal; callers re-read and
/// re-validate the file afterwards either way.
pub fn open(path: &Path, config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        return Ok(());
    }

    let editor = config.editor();

    // Split the command so editors with arguments work (e.g., "code --wait")
    let parts = shlex::split(&editor)
        .with_context(|| format!("Invalid editor command: {editor}"))?;
    let (program, args) = parts
        .split_first()
        .context("Empty editor command")?;

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("Failed to launch editor: {editor}"))?;

    if !status.success() {
        anyhow::bail!("Editor exited with error: {status}");
    }

    Ok(())
}
