//! # Configuration
//!
//! Optional global user configuration stored at `~/.config/git-issue/config`
//! (TOML). A missing file means defaults; no setup step is required.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, fs, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EDITOR, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at `~/.config/git-issue/config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Assignee applied to new issues when `--assignee` is not given
    #[serde(default)]
    pub default_assignee: Option<String>,

    /// Editor command (e.g., "nvim", "code --wait")
    #[serde(default)]
    pub editor: Option<String>,

    /// Commit every mutation to git without requiring `--commit`
    #[serde(default)]
    pub auto_commit: bool,
}

impl Config {
    /// Returns the path to the global config file.
    ///
    /// Checks the thread-local home override first (used by tests), then
    /// `$HOME/.config` (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the global config, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Resolves the editor command: config, then `$VISUAL`, then `$EDITOR`,
    /// then `vim`.
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }

    /// Resolves the assignee for a new issue ("" when nothing applies).
    pub fn resolve_assignee(&self, explicit: Option<String>) -> String {
        explicit
            .or_else(|| self.default_assignee.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_assignee.is_none());
        assert!(!config.auto_commit);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
default_assignee = "john"
editor = "code --wait"
auto_commit = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.default_assignee.as_deref(), Some("john"));
        assert_eq!(config.editor.as_deref(), Some("code --wait"));
        assert!(config.auto_commit);
    }

    #[test]
    fn test_resolve_assignee_priority() {
        let config = Config {
            default_assignee: Some("fallback".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_assignee(Some("explicit".to_string())),
            "explicit"
        );
        assert_eq!(config.resolve_assignee(None), "fallback");
        assert_eq!(Config::default().resolve_assignee(None), "");
    }

    #[test]
    fn test_home_override() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let expected = temp
            .path()
            .join(".config")
            .join(GLOBAL_CONFIG_DIR)
            .join(GLOBAL_CONFIG_FILENAME);

        set_home_override(Some(temp.path().to_path_buf()));
        assert_eq!(Config::path().unwrap(), expected);

        set_home_override(None);
        let path = Config::path();
        assert!(path.is_some());
        assert_ne!(path.unwrap(), expected);
    }
}
