//! # Issue Codec
//!
//! Converts between [`Issue`] and the on-disk Markdown + YAML frontmatter
//! format:
//!
//! ```text
//! ---
//! id, assignee, labels, created, updated
//! ---
//!
//! # <title>
//!
//! <body>
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{Frontmatter, Issue};
use crate::{
    constants::FRONTMATTER_DELIMITER,
    error::{Error, Result},
};

/// Parses a Markdown file with YAML frontmatter into an [`Issue`].
///
/// The content is split on the literal `---` delimiter into at most three
/// parts: the (empty) preamble, the YAML frontmatter, and the body. The title
/// comes from the first `# ` heading in the body; everything after that line
/// becomes the body text.
pub fn parse(content: &str) -> Result<Issue> {
    let mut parts = content.splitn(3, FRONTMATTER_DELIMITER);
    let _preamble = parts.next();
    let yaml = parts
        .next()
        .ok_or_else(|| Error::Format("missing YAML frontmatter".to_string()))?;
    let rest = parts
        .next()
        .ok_or_else(|| Error::Format("missing YAML frontmatter".to_string()))?;

    let frontmatter: Frontmatter = serde_yml::from_str(yaml)
        .map_err(|e| Error::Format(format!("failed to parse YAML frontmatter: {e}")))?;

    let (title, body) = extract_title(rest.trim())
        .ok_or_else(|| Error::Format("missing title (# heading)".to_string()))?;

    Ok(Issue {
        frontmatter,
        title,
        body,
    })
}

/// Scans the body lines for the first level-1 heading.
///
/// Returns the title (text after `# `) and the trimmed remainder, or `None`
/// when no heading exists or the heading is empty.
fn extract_title(raw: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = raw.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if let Some(title) = line.trim().strip_prefix("# ") {
            if title.is_empty() {
                return None;
            }
            let body = lines
                .get(i + 1..)
                .map_or_else(String::new, |tail| tail.join("\n").trim().to_string());
            return Some((title.to_string(), body));
        }
    }
    None
}

/// Serializes an [`Issue`] back to the Markdown + frontmatter format.
///
/// All frontmatter keys are written even when empty, so
/// `parse(serialize(x))` reproduces equivalent metadata and identical
/// title/body text.
pub fn serialize(issue: &Issue) -> Result<String> {
    let yaml = serde_yml::to_string(&issue.frontmatter)
        .map_err(|e| Error::Format(format!("failed to serialize frontmatter: {e}")))?;

    let mut out = String::with_capacity(yaml.len() + issue.title.len() + issue.body.len() + 16);
    out.push_str(FRONTMATTER_DELIMITER);
    out.push('\n');
    out.push_str(&yaml);
    out.push_str(FRONTMATTER_DELIMITER);
    out.push_str("\n\n# ");
    out.push_str(&issue.title);
    out.push_str("\n\n");

    if !issue.body.is_empty() {
        out.push_str(&issue.body);
        if !issue.body.ends_with('\n') {
            out.push('\n');
        }
    }

    Ok(out)
}
