//! # Identifier Allocator
//!
//! Allocates unique, zero-padded issue IDs backed by the `.counter` file.
//!
//! The persisted counter is a lower-bound hint, not an authoritative source:
//! files can appear or move outside the normal flow, so every allocation
//! probes the filesystem for collisions before committing to an ID.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use super::Repository;
use crate::{
    constants::MIN_ID_WIDTH,
    error::{Error, Result},
};

/// Formats a numeric ID as a zero-padded string ("001"; widens past 999).
pub fn format_id(id: u32) -> String {
    format!("{id:0width$}", width = MIN_ID_WIDTH)
}

/// Normalizes a user-typed ID to the padded on-disk form.
///
/// Accepts `1`, `#1`, or `001` for issue 001. Non-numeric input is returned
/// unchanged and will simply fail the subsequent lookup.
pub fn normalize_id(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('#');
    trimmed
        .parse::<u32>()
        .map_or_else(|_| trimmed.to_string(), format_id)
}

impl Repository {
    /// Allocates the next unique issue ID.
    ///
    /// Reads the counter, probes upward past any ID whose file already exists
    /// in either status directory, persists `allocated + 1`, and returns the
    /// allocated value. If persisting the counter fails, the allocation must
    /// be treated as uncommitted: the caller must not save the issue, or the
    /// same ID could be handed out again on the next run.
    ///
    /// Two concurrent processes can both observe the same free ID; a
    /// repository-scoped lock file would be needed to harden this, which the
    /// single-user CLI deliberately omits.
    pub fn next_id(&self) -> Result<u32> {
        let counter_path = self.counter_path();

        let data = fs::read_to_string(&counter_path)
            .map_err(|e| Error::CorruptCounter(format!("failed to read counter: {e}")))?;
        let current: u32 = data
            .trim()
            .parse()
            .map_err(|_| Error::CorruptCounter(format!("invalid counter value {:?}", data.trim())))?;

        // Probe past any ID that is already taken, in either directory
        let mut candidate = current;
        while self.find_issue_file(&format_id(candidate)).is_ok() {
            candidate += 1;
        }

        fs::write(&counter_path, format!("{}\n", candidate + 1))
            .map_err(Error::io("failed to write counter".to_string()))?;

        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{constants::ISSUES_DIR, issue::Status};

    fn test_repo() -> (tempfile::TempDir, Repository) {
        let dir = tempdir().unwrap();
        let repo = Repository::at(dir.path().join(ISSUES_DIR));
        repo.init().unwrap();
        (dir, repo)
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "001");
        assert_eq!(format_id(42), "042");
        assert_eq!(format_id(999), "999");
        assert_eq!(format_id(1000), "1000");
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("1"), "001");
        assert_eq!(normalize_id("#7"), "007");
        assert_eq!(normalize_id("001"), "001");
        assert_eq!(normalize_id("1000"), "1000");
        assert_eq!(normalize_id("abc"), "abc");
    }

    #[test]
    fn test_sequential_allocation() {
        let (_dir, repo) = test_repo();
        assert_eq!(repo.next_id().unwrap(), 1);
        assert_eq!(
            fs::read_to_string(repo.counter_path()).unwrap(),
            "2\n"
        );
        assert_eq!(repo.next_id().unwrap(), 2);
    }

    #[test]
    fn test_allocation_skips_existing_files() {
        let (_dir, repo) = test_repo();

        // A file bearing ID 001 appeared outside the normal flow
        let issue = repo.new_issue(1, "Manually placed", "", vec![]);
        repo.save_issue(&issue, Status::Open).unwrap();

        assert_eq!(repo.next_id().unwrap(), 2);
        assert_eq!(fs::read_to_string(repo.counter_path()).unwrap(), "3\n");
    }

    #[test]
    fn test_allocation_skips_closed_issues_too() {
        let (_dir, repo) = test_repo();
        let issue = repo.new_issue(1, "Done already", "", vec![]);
        repo.save_issue(&issue, Status::Closed).unwrap();

        assert_eq!(repo.next_id().unwrap(), 2);
    }

    #[test]
    fn test_counter_behind_reality() {
        let (_dir, repo) = test_repo();
        for id in 1..=3 {
            let issue = repo.new_issue(id, "Pre-existing", "", vec![]);
            repo.save_issue(&issue, Status::Open).unwrap();
        }
        // Counter still says 1; allocation probes past all three
        assert_eq!(repo.next_id().unwrap(), 4);
        assert_eq!(fs::read_to_string(repo.counter_path()).unwrap(), "5\n");
    }

    #[test]
    fn test_corrupt_counter_is_fatal() {
        let (_dir, repo) = test_repo();
        fs::write(repo.counter_path(), "not a number\n").unwrap();
        let err = repo.next_id().unwrap_err();
        assert!(matches!(err, Error::CorruptCounter(_)));
    }

    #[test]
    fn test_missing_counter_is_fatal() {
        let (_dir, repo) = test_repo();
        fs::remove_file(repo.counter_path()).unwrap();
        let err = repo.next_id().unwrap_err();
        assert!(matches!(err, Error::CorruptCounter(_)));
    }
}
