//! # Close/Reopen Commands
//!
//! Closes or reopens issues by moving them between the open and closed
//! directories. Both transitions require the issue to currently be in the
//! source state.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use super::{maybe_commit, open_repo};
use crate::{
    config::Config,
    error::Error,
    issue::Status,
    storage::normalize_id,
    ui,
};

/// Executes the close command (open → closed).
pub fn execute_close(id: &str, commit: bool) -> Result<()> {
    transition(id, Status::Open, Status::Closed, commit, "Close", "Closed")
}

/// Executes the reopen command (closed → open).
pub fn execute_reopen(id: &str, commit: bool) -> Result<()> {
    transition(id, Status::Closed, Status::Open, commit, "Reopen", "Reopened")
}

fn transition(
    id: &str,
    from: Status,
    to: Status,
    commit: bool,
    verb: &str,
    done: &str,
) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repo()?;
    let id = normalize_id(id);

    // Guard the no-op transition before touching anything
    let (_, current) = repo.find_issue_file(&id)?;
    if current == to {
        return Err(Error::AlreadyInStatus { id, status: to }.into());
    }

    let (_, warnings) = repo.move_issue(&id, from, to)?;
    ui::print_warnings(&warnings);

    ui::print_success(&format!("{done} issue #{id}"));

    maybe_commit(
        &repo,
        commit,
        config.auto_commit,
        &format!("{verb} issue #{id}"),
    );

    Ok(())
}
