//! # Create Command
//!
//! Creates a new issue with the given title.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::{maybe_commit, open_repo};
use crate::{config::Config, issue::Status, ui};

/// Arguments for the create command
pub struct CreateArgs {
    pub title: String,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
    pub commit: bool,
}

/// Executes the create command.
pub fn execute(args: CreateArgs) -> Result<()> {
    let config = Config::load()?;
    let repo = open_repo()?;

    let title = args.title.trim();
    if title.is_empty() {
        anyhow::bail!("issue title cannot be empty");
    }

    // The counter is advanced here; if this fails the issue is never saved,
    // so an ID can't be silently reused on the next run
    let id = repo.next_id().context("failed to get next issue ID")?;

    let assignee = config.resolve_assignee(args.assignee);
    let issue = repo.new_issue(id, title, &assignee, args.labels);

    let path = repo
        .save_issue(&issue, Status::Open)
        .context("failed to save issue")?;

    println!(
        "{} Created issue {}: {}",
        "✓".green(),
        format!("#{}", issue.id()).green().bold(),
        issue.title
    );
    println!();
    println!("  {} {}", "Status:".bold(), "open".green());
    if !issue.assignee().is_empty() {
        println!("  {} {}", "Assignee:".bold(), issue.assignee());
    }
    if !issue.labels().is_empty() {
        println!("  {} {}", "Labels:".bold(), issue.labels().join(", "));
    }
    println!(
        "  {} {}",
        "Created:".bold(),
        issue.created().format("%Y-%m-%d %H:%M:%S")
    );
    println!();
    println!("Issue saved to: {}", path.display());
    println!("Edit the file to add a detailed description.");

    maybe_commit(
        &repo,
        args.commit,
        config.auto_commit,
        &format!("Create issue #{}", issue.id()),
    );

    Ok(())
}
