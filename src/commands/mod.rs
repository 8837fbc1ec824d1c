//! # Commands
//!
//! CLI command implementations for git-issue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod close;
pub mod completions;
pub mod create;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod show;
pub mod view;

pub use self::{
    close::{execute_close, execute_reopen},
    completions::execute as completions,
    create::{execute as create, CreateArgs},
    edit::execute as edit,
    init::execute as init,
    list::{execute as list, ListFilter},
    search::{execute as search, SearchArgs},
    show::execute as show,
    view::execute as view,
};

use anyhow::Result;

use crate::{storage::Repository, ui};

/// Opens the repository in the current directory, failing with a hint when
/// `gi init` has not been run yet.
pub(crate) fn open_repo() -> Result<Repository> {
    let repo = Repository::open_current();
    if !repo.exists() {
        anyhow::bail!(".issues directory not found. Run 'gi init' first");
    }
    Ok(repo)
}

/// Commits `.issues` after a successful mutation when requested.
///
/// The mutation already happened; a git failure here is reported as a
/// warning, never as a command failure.
pub(crate) fn maybe_commit(repo: &Repository, requested: bool, auto: bool, message: &str) {
    if !(requested || auto) {
        return;
    }
    match crate::storage::git::commit_changes(message, repo.root()) {
        Ok(()) => ui::print_success("Changes committed to git"),
        Err(err) => ui::print_warnings(&[format!("git commit failed: {err:#}")]),
    }
}
