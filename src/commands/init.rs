//! # Init Command
//!
//! Initializes the `.issues` directory structure in the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::storage::Repository;

/// Executes the init command.
pub fn execute() -> Result<()> {
    let repo = Repository::open_current();

    if repo.exists() {
        anyhow::bail!(".issues directory already exists. Use 'gi list' to see existing issues");
    }

    repo.init()?;

    println!("{} Initialized .issues directory structure:", "✓".green());
    println!();
    println!("  .issues/");
    println!("  ├── open/       {}", "# Open issues".dimmed());
    println!("  ├── closed/     {}", "# Closed issues".dimmed());
    println!(
        "  ├── .counter    {}",
        "# Issue ID counter (initialized to 1)".dimmed()
    );
    println!(
        "  └── template.md {}",
        "# Template for new issues".dimmed()
    );
    println!();
    println!("You can now create issues with 'gi create <title>'");

    Ok(())
}
