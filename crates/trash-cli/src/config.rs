//! Shell configuration.
//!
//! Settings come from command-line flags, which fall back to environment
//! variables and then to the defaults below.
//!
//! # Environment Variables
//!
//! - `TRASH_LISTS_DIR`: directory holding the list files (default `lists`)
//! - `TRASH_EXTENSION`: list file extension (default `csv`)
//! - `TRASH_HISTORY`: line history file (default `~/.trash_history`)

use std::path::PathBuf;

use trash_store::Catalog;

/// Default list directory, relative to the working directory.
pub const DEFAULT_LISTS_DIR: &str = "lists";

/// Default list file extension.
pub const DEFAULT_EXTENSION: &str = "csv";

const HISTORY_FILE: &str = ".trash_history";

/// Settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Directory scanned for lists.
    pub lists_dir: PathBuf,
    /// Extension of list files, without the dot.
    pub extension: String,
    /// Line history file; `None` disables history.
    pub history: Option<PathBuf>,
    /// Offer to print error details after a failed command.
    pub trace_prompt: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            lists_dir: PathBuf::from(DEFAULT_LISTS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            history: Some(default_history_path()),
            trace_prompt: true,
        }
    }
}

impl ShellConfig {
    /// Catalog over the configured list directory.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(&self.lists_dir, &self.extension)
    }
}

/// Default history file: `~/.trash_history`, or the working directory when
/// no home directory is known.
pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(HISTORY_FILE))
        .unwrap_or_else(|| PathBuf::from(HISTORY_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.lists_dir, PathBuf::from("lists"));
        assert_eq!(config.extension, "csv");
        assert!(config.trace_prompt);
        assert!(config
            .history
            .unwrap()
            .to_string_lossy()
            .ends_with(".trash_history"));
    }

    #[test]
    fn test_catalog_uses_config() {
        let config = ShellConfig {
            lists_dir: PathBuf::from("/tmp/tracks"),
            extension: "tsv".to_string(),
            history: None,
            trace_prompt: false,
        };
        let catalog = config.catalog();
        assert_eq!(catalog.path_for("x"), PathBuf::from("/tmp/tracks/x.tsv"));
    }
}
