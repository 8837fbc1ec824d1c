//! # List Command
//!
//! Lists issues with optional status/assignee/label filtering.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_repo;
use crate::{
    issue::{Issue, Status},
    storage::Repository,
    ui,
};

/// Filter options for listing.
///
/// One immutable value built from the CLI flags and passed down, rather than
/// process-wide mutable state.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Include both open and closed issues
    pub all: bool,
    /// Restrict to a single status
    pub status: Option<Status>,
    /// Keep only issues with this exact assignee
    pub assignee: Option<String>,
    /// Keep only issues carrying this label
    pub label: Option<String>,
}

impl ListFilter {
    /// Status directories to enumerate for this filter.
    pub fn statuses(&self) -> Vec<Status> {
        match self.status {
            Some(status) => vec![status],
            None if self.all => vec![Status::Open, Status::Closed],
            None => vec![Status::Open],
        }
    }

    /// Applies the assignee/label predicates.
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(ref assignee) = self.assignee {
            if issue.assignee() != assignee {
                return false;
            }
        }
        if let Some(ref label) = self.label {
            if !issue.has_label(label) {
                return false;
            }
        }
        true
    }
}

/// Collects issues from the requested status directories, tagging each with
/// its derived status. Per-directory listing failures are skipped so a
/// missing directory never aborts the rest.
pub fn collect_issues(repo: &Repository, filter: &ListFilter) -> Vec<(Issue, Status)> {
    let mut rows = Vec::new();
    for status in filter.statuses() {
        let Ok(issues) = repo.list_issues(status) else {
            continue;
        };
        rows.extend(
            issues
                .into_iter()
                .filter(|issue| filter.matches(issue))
                .map(|issue| (issue, status)),
        );
    }
    rows
}

/// Executes the list command.
pub fn execute(filter: &ListFilter) -> Result<()> {
    let repo = open_repo()?;

    let rows = collect_issues(&repo, filter);

    if rows.is_empty() {
        println!("{}", "No issues found.".dimmed());
        return Ok(());
    }

    ui::print_issue_table(&rows);
    println!();
    println!("Total: {} issue(s)", rows.len());

    Ok(())
}
