//! # Test Harness
//!
//! Utilities for integration testing git-issue without affecting user
//! configuration. Uses thread-local storage instead of environment variables
//! to avoid any interference with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)] // Not every test binary uses every helper

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use git_issue::set_home_override;

/// Global lock to ensure tests run sequentially.
/// This prevents races when tests change the current directory.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment that manages temporary directories for both
/// the "home" directory (for global config) and the project directory.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/git-issue/config)
    pub home_dir: TempDir,
    /// Temporary directory for the project
    pub project_dir: TempDir,
    /// Original current directory to restore on drop
    original_cwd: PathBuf,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with temporary directories.
    ///
    /// Uses thread-local storage to redirect global config (no env var
    /// modification). Changes to the project directory for the duration of
    /// the test.
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        let project_dir = TempDir::new().expect("Failed to create temp project dir");

        let original_cwd = env::current_dir().expect("Failed to get current dir");

        set_home_override(Some(home_dir.path().to_path_buf()));
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            home_dir,
            project_dir,
            original_cwd,
            test_guard,
        }
    }

    /// Returns the path to the project directory.
    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Returns the path where the global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("git-issue")
            .join("config")
    }

    /// Returns the path to the .issues directory.
    pub fn issues_path(&self) -> PathBuf {
        self.project_dir.path().join(".issues")
    }

    /// Returns the path to the open issues directory.
    pub fn open_path(&self) -> PathBuf {
        self.issues_path().join("open")
    }

    /// Returns the path to the closed issues directory.
    pub fn closed_path(&self) -> PathBuf {
        self.issues_path().join("closed")
    }

    /// Returns the path to the counter file.
    pub fn counter_path(&self) -> PathBuf {
        self.issues_path().join(".counter")
    }

    /// Returns the path to the template file.
    pub fn template_path(&self) -> PathBuf {
        self.issues_path().join("template.md")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the counter file content.
    pub fn counter_value(&self) -> String {
        fs::read_to_string(self.counter_path()).expect("Failed to read counter")
    }

    /// Lists all .md files in the open directory.
    pub fn list_open_files(&self) -> Vec<PathBuf> {
        list_md_files(&self.open_path())
    }

    /// Lists all .md files in the closed directory.
    pub fn list_closed_files(&self) -> Vec<PathBuf> {
        list_md_files(&self.closed_path())
    }

    /// Reads an issue file by its path and returns the content.
    pub fn read_file(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read issue file")
    }

    /// Finds an issue file by ID across both status directories.
    /// Returns (path, "open" | "closed").
    pub fn find_issue(&self, id: &str) -> Option<(PathBuf, &'static str)> {
        let prefix = format!("{id}-");
        for (dir, name) in [(self.open_path(), "open"), (self.closed_path(), "closed")] {
            let hit = list_md_files(&dir).into_iter().find(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            });
            if let Some(path) = hit {
                return Some((path, name));
            }
        }
        None
    }

    /// Writes a raw issue file directly into a status directory.
    pub fn write_issue(&self, status: &str, filename: &str, content: &str) -> PathBuf {
        let dir = self.issues_path().join(status);
        fs::create_dir_all(&dir).expect("Failed to create status directory");
        let path = dir.join(filename);
        fs::write(&path, content).expect("Failed to write issue file");
        path
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Restore original working directory first
        let _ = env::set_current_dir(&self.original_cwd);

        // Clear the thread-local home override
        set_home_override(None);
    }
}

/// Lists all .md files directly inside a directory.
fn list_md_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        return Vec::new();
    }
    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

// =============================================================================
// Test Setup Helpers
// =============================================================================

/// Creates a fully initialized test environment.
pub fn setup_test_env() -> TestEnv {
    let env = TestEnv::new();
    git_issue::commands::init().expect("init should succeed");
    env
}

/// Builds raw issue file content with the standard frontmatter.
pub fn make_issue_content(
    id: &str,
    title: &str,
    assignee: &str,
    labels: &[&str],
    body: &str,
) -> String {
    let labels_yaml = if labels.is_empty() {
        "[]".to_string()
    } else {
        format!(
            "\n{}",
            labels
                .iter()
                .map(|l| format!("  - {l}"))
                .collect::<Vec<_>>()
                .join("\n")
        )
    };

    format!(
        r#"---
id: "{id}"
assignee: "{assignee}"
labels: {labels_yaml}
created: 2026-01-09T12:00:00Z
updated: 2026-01-09T12:00:00Z
---

# {title}

{body}
"#
    )
}

/// Creates an issue file directly in a status directory, bypassing the
/// normal create flow (simulates out-of-band file creation).
pub fn create_raw_issue(env: &TestEnv, status: &str, id: &str, title: &str) -> PathBuf {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    let filename = format!("{id}-{slug}.md");
    let content = make_issue_content(id, title, "", &[], "Raw issue body.");
    env.write_issue(status, &filename, &content)
}
