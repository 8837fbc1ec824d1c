//! # UI Utilities
//!
//! Table formatting and colored output helpers shared across commands.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{UI_LABELS_TRUNCATE_LEN, UI_TITLE_TRUNCATE_LEN},
    issue::{Issue, Status},
};

/// Prints the issue table used by `list` and `search`.
///
/// Columns: ID, title, status (colored), assignee, labels. Empty assignee
/// and labels render as `-`.
pub fn print_issue_table(rows: &[(Issue, Status)]) {
    let id_width = rows
        .iter()
        .map(|(issue, _)| issue.id().len() + 1)
        .max()
        .unwrap_or(4)
        .max("ID".len());

    println!(
        "{}  {}  {}  {}  {}",
        pad("ID", id_width).bold(),
        pad("TITLE", UI_TITLE_TRUNCATE_LEN).bold(),
        pad("STATUS", 6).bold(),
        pad("ASSIGNEE", 12).bold(),
        "LABELS".bold()
    );

    for (issue, status) in rows {
        let title = truncate(&issue.title, UI_TITLE_TRUNCATE_LEN);
        let assignee = if issue.assignee().is_empty() {
            "-".to_string()
        } else {
            issue.assignee().to_string()
        };
        let labels = if issue.labels().is_empty() {
            "-".to_string()
        } else {
            truncate(&issue.labels().join(", "), UI_LABELS_TRUNCATE_LEN)
        };

        let status_cell = match status {
            Status::Open => pad("open", 6).green().to_string(),
            Status::Closed => pad("closed", 6).red().to_string(),
        };

        println!(
            "{}  {}  {}  {}  {}",
            pad(&format!("#{}", issue.id()), id_width),
            pad(&title, UI_TITLE_TRUNCATE_LEN),
            status_cell,
            pad(&assignee, 12),
            labels
        );
    }
}

/// Prints a success line: `✓ {message}`.
pub fn print_success(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Prints warnings with a yellow prefix to stderr.
pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {warning}", "warning:".yellow());
    }
}

/// Pads a string to the given display width (unicode-aware).
fn pad(s: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - current))
    }
}

/// Truncates a string to the specified display width, adding an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = UnicodeWidthStr::width(c.to_string().as_str());
        if width + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
