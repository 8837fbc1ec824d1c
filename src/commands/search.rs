//! # Search Command
//!
//! Case-insensitive text search over issue titles and bodies.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::{list::collect_issues, open_repo};
use crate::{
    issue::{Issue, Status},
    ui,
};

/// Arguments for the search command
#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub query: String,
    pub status: Option<Status>,
    pub assignee: Option<String>,
    pub label: Option<String>,
}

/// Executes the search command.
pub fn execute(args: &SearchArgs) -> Result<()> {
    let repo = open_repo()?;

    let query = args.query.trim();
    if query.is_empty() {
        anyhow::bail!("search query cannot be empty");
    }
    let query_lower = query.to_lowercase();

    // Search spans both directories unless a status filter narrows it
    let filter = super::ListFilter {
        all: true,
        status: args.status,
        assignee: args.assignee.clone(),
        label: args.label.clone(),
    };

    let mut rows: Vec<(Issue, Status)> = collect_issues(&repo, &filter);
    rows.retain(|(issue, _)| matches_query(issue, &query_lower));

    if rows.is_empty() {
        println!("No issues found matching '{query}'.");
        return Ok(());
    }

    ui::print_issue_table(&rows);
    println!();
    println!("Found {} issue(s) matching '{query}'", rows.len());

    Ok(())
}

/// Case-insensitive substring match over title and body.
fn matches_query(issue: &Issue, query_lower: &str) -> bool {
    issue.title.to_lowercase().contains(query_lower)
        || issue.body.to_lowercase().contains(query_lower)
}
