//! # Slugification
//!
//! Converts titles into URL-safe, filesystem-friendly slugs.
//!
//! ## Rules
//! 1. Convert to lowercase
//! 2. Replace spaces with hyphens
//! 3. Drop every character outside `[a-z0-9-]`
//! 4. Collapse multiple hyphens
//! 5. Trim hyphens from start/end
//! 6. Truncate to 50 characters
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::constants::MAX_SLUG_LENGTH;

/// Converts a title string into a filesystem-safe slug.
///
/// Pure and deterministic. Note that punctuation is dropped, not hyphenated:
/// only spaces turn into hyphens. A title made entirely of dropped characters
/// produces an empty slug, which callers must tolerate in filenames.
///
/// # Example
/// ```
/// use git_issue::issue::slug::slugify;
/// assert_eq!(slugify("Fix Login Bug!"), "fix-login-bug");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut prev_was_hyphen = true; // Start true to trim leading hyphens

    for c in title.chars() {
        let c = if c == ' ' { '-' } else { c.to_ascii_lowercase() };
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            prev_was_hyphen = false;
        } else if c == '-' && !prev_was_hyphen {
            slug.push('-');
            prev_was_hyphen = true;
        }
        // Anything else (punctuation, non-ASCII) is dropped entirely
    }

    // Trim trailing hyphen
    if slug.ends_with('-') {
        slug.pop();
    }

    // Truncate, then trim any hyphen the cut left behind
    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}
