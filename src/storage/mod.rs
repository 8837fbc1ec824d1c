//! # Storage
//!
//! The repository store: owns the `.issues/` directory layout and every
//! file-level operation on issues (init, find, load, save, move, list,
//! delete).
//!
//! Layout, relative to the project root:
//!
//! ```text
//! .issues/
//!   open/*.md
//!   closed/*.md
//!   .counter        # next-ID hint, decimal integer + newline
//!   template.md     # default body for new issues
//! ```
//!
//! Status is encoded purely by directory membership; loaders return it
//! alongside the parsed record.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod counter;
pub mod git;

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    constants::{
        COUNTER_FILE, DEFAULT_TEMPLATE, FRONTMATTER_DELIMITER, ISSUES_DIR, ISSUE_FILE_EXTENSION,
        TEMPLATE_FILE,
    },
    error::{Error, Result},
    issue::{codec, Issue, Status},
};

pub use self::counter::{format_id, normalize_id};

/// Handle to an issue repository rooted at a `.issues` directory.
///
/// A plain value threaded through every operation call; holds no open file
/// handles and no mutable state.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Creates a handle rooted at the given `.issues` directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a handle for `.issues` in the current working directory.
    pub fn open_current() -> Self {
        Self::at(ISSUES_DIR)
    }

    /// True iff the top-level repository directory is present.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Returns the repository root (the `.issues` directory).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of a status directory.
    pub fn status_path(&self, status: Status) -> PathBuf {
        self.root.join(status.dir_name())
    }

    /// Returns the path of the counter file.
    pub fn counter_path(&self) -> PathBuf {
        self.root.join(COUNTER_FILE)
    }

    /// Returns the path of the template file.
    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }

    /// Creates the directory layout, counter, and template.
    ///
    /// Idempotent: missing pieces are created, existing ones are left
    /// untouched. An existing counter or template is never overwritten.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .map_err(Error::io(format!("failed to create {}", self.root.display())))?;

        for status in [Status::Open, Status::Closed] {
            let dir = self.status_path(status);
            fs::create_dir_all(&dir)
                .map_err(Error::io(format!("failed to create {}", dir.display())))?;

            // .keep files so empty status directories survive git
            let keep = dir.join(".keep");
            if !keep.exists() {
                fs::write(&keep, "")
                    .map_err(Error::io(format!("failed to create {}", keep.display())))?;
            }
        }

        let counter = self.counter_path();
        if !counter.exists() {
            fs::write(&counter, "1\n")
                .map_err(Error::io("failed to create counter file".to_string()))?;
        }

        let template = self.template_path();
        if !template.exists() {
            fs::write(&template, DEFAULT_TEMPLATE)
                .map_err(Error::io("failed to create template file".to_string()))?;
        }

        Ok(())
    }

    /// Locates the file for an issue ID.
    ///
    /// Searches `open/` first, then `closed/`, matching any filename with
    /// prefix `{id}-` and suffix `.md`. Returns the path and the status
    /// directory that holds it.
    pub fn find_issue_file(&self, id: &str) -> Result<(PathBuf, Status)> {
        for status in [Status::Open, Status::Closed] {
            if let Some(path) = find_in_directory(&self.status_path(status), id) {
                return Ok((path, status));
            }
        }
        Err(Error::NotFound(id.to_string()))
    }

    /// Loads and parses an issue by ID, returning its derived status.
    pub fn load_issue(&self, id: &str) -> Result<(Issue, Status)> {
        let (path, status) = self.find_issue_file(id)?;
        let content = fs::read_to_string(&path)
            .map_err(Error::io(format!("failed to read {}", path.display())))?;
        let issue = codec::parse(&content)?;
        Ok((issue, status))
    }

    /// Writes an issue into the given status directory.
    ///
    /// If a file for this ID already exists anywhere, its location must match
    /// `status` (otherwise [`Error::SaveConflict`]) and its filename is
    /// reused verbatim, so editing a title never renames the file. Only when
    /// no file exists yet is a filename computed, once, as `{id}-{slug}.md`.
    pub fn save_issue(&self, issue: &Issue, status: Status) -> Result<PathBuf> {
        let path = match self.find_issue_file(issue.id()) {
            Ok((existing_path, existing_status)) => {
                if existing_status != status {
                    return Err(Error::SaveConflict {
                        id: issue.id().to_string(),
                        actual: existing_status,
                        requested: status,
                    });
                }
                existing_path
            }
            Err(err) if err.is_not_found() => {
                self.status_path(status).join(issue.initial_filename())
            }
            Err(err) => return Err(err),
        };

        let content = codec::serialize(issue)?;
        fs::write(&path, content)
            .map_err(Error::io(format!("failed to write {}", path.display())))?;

        Ok(path)
    }

    /// Moves an issue between status directories, preserving its filename.
    ///
    /// The issue must currently reside in `from`, otherwise
    /// [`Error::MoveConflict`] names its actual location. After a successful
    /// rename the `updated` timestamp is refreshed in place; if that rewrite
    /// fails the move stands and the failure is returned as a warning string
    /// rather than an error.
    pub fn move_issue(&self, id: &str, from: Status, to: Status) -> Result<(PathBuf, Vec<String>)> {
        let (old_path, actual) = self.find_issue_file(id)?;
        if actual != from {
            return Err(Error::MoveConflict {
                id: id.to_string(),
                actual,
                expected: from,
            });
        }

        let filename = old_path
            .file_name()
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        let new_path = self.status_path(to).join(filename);

        // Atomic on the same volume; never leaves two copies visible
        fs::rename(&old_path, &new_path).map_err(Error::io(format!(
            "failed to move {} to {}",
            old_path.display(),
            new_path.display()
        )))?;

        let mut warnings = Vec::new();
        if let Err(err) = refresh_updated(&new_path) {
            warnings.push(format!(
                "issue {id} moved, but updating its timestamp failed: {err}"
            ));
        }

        Ok((new_path, warnings))
    }

    /// Lists all issues in a status directory, in directory enumeration
    /// order (not sorted).
    ///
    /// Files that fail to read or parse are silently skipped: partial
    /// corruption of one record must not hide the rest.
    pub fn list_issues(&self, status: Status) -> Result<Vec<Issue>> {
        let dir = self.status_path(status);
        if !dir.is_dir() {
            return Err(Error::Io {
                context: format!("failed to read directory {}", dir.display()),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let issues = issue_files(&dir)
            .filter_map(|path| fs::read_to_string(path).ok())
            .filter_map(|content| codec::parse(&content).ok())
            .collect();

        Ok(issues)
    }

    /// Removes an issue file. Cleanup flows only; no soft delete.
    pub fn delete_issue(&self, id: &str) -> Result<()> {
        let (path, _) = self.find_issue_file(id)?;
        fs::remove_file(&path)
            .map_err(Error::io(format!("failed to delete {}", path.display())))
    }

    /// Returns the template body: everything after the `# ` heading of
    /// `template.md`, or an empty string when the template is missing or
    /// malformed.
    pub fn template_body(&self) -> String {
        let Ok(content) = fs::read_to_string(self.template_path()) else {
            return String::new();
        };

        let mut parts = content.splitn(3, FRONTMATTER_DELIMITER);
        let (Some(_), Some(_), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
            return String::new();
        };

        let body = rest.trim();
        let lines: Vec<&str> = body.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            if line.trim().starts_with("# ") {
                return lines
                    .get(i + 1..)
                    .map_or_else(String::new, |tail| tail.join("\n").trim().to_string());
            }
        }

        // No title heading in the template: use the whole body
        body.to_string()
    }

    /// Creates a fresh issue record with the template body and
    /// `created == updated == now`.
    pub fn new_issue(&self, id: u32, title: &str, assignee: &str, labels: Vec<String>) -> Issue {
        let mut issue = Issue::new(
            format_id(id),
            title.to_string(),
            assignee.to_string(),
            labels,
        );
        issue.body = self.template_body();
        issue
    }
}

/// Scans one status directory for a file named `{id}-*.md`.
fn find_in_directory(dir: &Path, id: &str) -> Option<PathBuf> {
    let prefix = format!("{id}-");
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| {
                    name.starts_with(&prefix) && name.ends_with(&format!(".{ISSUE_FILE_EXTENSION}"))
                })
        })
}

/// Iterates the `.md` files directly inside a directory.
fn issue_files(dir: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == ISSUE_FILE_EXTENSION)
        })
        .map(walkdir::DirEntry::into_path)
}

/// Re-reads an issue file, bumps `updated`, and rewrites it in place.
fn refresh_updated(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .map_err(Error::io(format!("failed to read {}", path.display())))?;
    let mut issue = codec::parse(&content)?;
    issue.touch();
    let content = codec::serialize(&issue)?;
    fs::write(path, content)
        .map_err(Error::io(format!("failed to write {}", path.display())))
}
