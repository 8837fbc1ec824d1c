//! # Show Command
//!
//! Shows detailed information about a single issue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::open_repo;
use crate::{
    issue::Status,
    storage::normalize_id,
};

/// Executes the show command.
pub fn execute(id: &str) -> Result<()> {
    let repo = open_repo()?;
    let id = normalize_id(id);

    let (issue, status) = repo
        .load_issue(&id)
        .map_err(|_| anyhow::anyhow!("issue #{id} not found"))?;

    println!("{} {}", "Issue".bold(), format!("#{}", issue.id()).bold());
    println!("{}", "=".repeat(60));
    println!();
    println!("{} {}", "Title:".bold(), issue.title);
    println!();

    let status_str = match status {
        Status::Open => "open".green().bold().to_string(),
        Status::Closed => "closed".red().bold().to_string(),
    };
    println!("{} {status_str}", "Status:".bold());

    if !issue.assignee().is_empty() {
        println!("{} {}", "Assignee:".bold(), issue.assignee());
    }
    if !issue.labels().is_empty() {
        println!("{} {}", "Labels:".bold(), issue.labels().join(", "));
    }
    println!(
        "{} {}",
        "Created:".bold(),
        issue.created().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{} {}",
        "Updated:".bold(),
        issue.updated().format("%Y-%m-%d %H:%M:%S")
    );

    if !issue.body.is_empty() {
        println!();
        println!("{}", "-".repeat(60));
        println!();
        println!("{}", issue.body);
    }

    Ok(())
}
