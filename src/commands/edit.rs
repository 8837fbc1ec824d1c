//! # Edit Command
//!
//! Opens an issue in the user's editor, then re-validates and stamps it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use anyhow::{Context, Result};

use super::{maybe_commit, open_repo};
use crate::{
    config::Config,
    editor,
    issue::codec,
    storage::normalize_id,
    ui,
};

/// Executes the edit command.
///
/// After the editor exits, the file is re-read and re-parsed. A malformed
/// result is surfaced as an error but the edited content is left in place —
/// the user fixes it with another edit; nothing is rolled back.
pub fn execute(id: &str, commit: bool) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repo()?;
    let id = normalize_id(id);

    let (path, status) = repo.find_issue_file(&id)?;

    editor::open(&path, &config).context("Failed to open editor")?;

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read edited file: {}", path.display()))?;
    let mut issue =
        codec::parse(&content).context("invalid issue format after editing")?;

    issue.touch();
    repo.save_issue(&issue, status)
        .context("failed to save issue")?;

    ui::print_success(&format!("Updated issue #{id}"));

    maybe_commit(
        &repo,
        commit,
        config.auto_commit,
        &format!("Edit issue #{id}"),
    );

    Ok(())
}
