//! # Constants
//!
//! Centralized constants for magic values used throughout git-issue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Repository Layout
// =============================================================================

/// Top-level directory holding all issue data (relative to the project root).
pub const ISSUES_DIR: &str = ".issues";

/// Subdirectory for open issues.
pub const OPEN_DIR: &str = "open";

/// Subdirectory for closed issues.
pub const CLOSED_DIR: &str = "closed";

/// Counter file holding the next-ID hint (single decimal integer + newline).
pub const COUNTER_FILE: &str = ".counter";

/// Template file used to seed the body of new issues.
pub const TEMPLATE_FILE: &str = "template.md";

/// File extension for issue files.
pub const ISSUE_FILE_EXTENSION: &str = "md";

// =============================================================================
// Issue Format
// =============================================================================

/// YAML frontmatter delimiter.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Maximum slug length in characters.
pub const MAX_SLUG_LENGTH: usize = 50;

/// Minimum width of a zero-padded issue ID ("001"; grows past 999).
pub const MIN_ID_WIDTH: usize = 3;

/// Default content of `.issues/template.md`, written once at init.
pub const DEFAULT_TEMPLATE: &str = r#"---
id: ""
assignee: ""
labels: []
created:
updated:
---

# Issue Title

## Description

Describe the issue here...

## Requirements

- Requirement 1
- Requirement 2

## Success Criteria

- [ ] Criterion 1
- [ ] Criterion 2
"#;

// =============================================================================
// UI Display
// =============================================================================

/// Maximum length for title display in lists (truncated with ellipsis).
pub const UI_TITLE_TRUNCATE_LEN: usize = 50;

/// Maximum length for labels display in lists (truncated with ellipsis).
pub const UI_LABELS_TRUNCATE_LEN: usize = 24;

// =============================================================================
// External Programs
// =============================================================================

/// Fallback editor when neither config nor $VISUAL/$EDITOR is set.
pub const DEFAULT_EDITOR: &str = "vim";

// =============================================================================
// Global Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "git-issue";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
