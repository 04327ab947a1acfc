//! Command-line interface definition using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{default_history_path, ShellConfig};

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// TraSH - an interactive shell for tracking lists stored as CSV files
#[derive(Parser, Debug)]
#[command(name = "trash")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding the list files
    #[arg(short = 'd', long, env = "TRASH_LISTS_DIR", default_value = "lists")]
    pub lists_dir: PathBuf,

    /// Extension of list files
    #[arg(short, long, env = "TRASH_EXTENSION", default_value = "csv")]
    pub extension: String,

    /// Line history file (default: ~/.trash_history)
    #[arg(long, env = "TRASH_HISTORY")]
    pub history: Option<PathBuf>,

    /// Do not load or save line history
    #[arg(long)]
    pub no_history: bool,

    /// Do not offer error details after a failed command
    #[arg(long)]
    pub no_trace_prompt: bool,
}

impl Cli {
    /// Builds the shell configuration from the parsed arguments.
    pub fn shell_config(&self) -> ShellConfig {
        let history = if self.no_history {
            None
        } else {
            Some(self.history.clone().unwrap_or_else(default_history_path))
        };

        ShellConfig {
            lists_dir: self.lists_dir.clone(),
            extension: self.extension.clone(),
            history,
            trace_prompt: !self.no_trace_prompt,
        }
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["trash"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_history);
        assert!(!cli.no_trace_prompt);
    }

    #[test]
    fn test_cli_shell_config() {
        let cli = Cli::parse_from([
            "trash",
            "-d",
            "/tmp/tracks",
            "-e",
            "tsv",
            "--history",
            "/tmp/hist",
            "--no-trace-prompt",
        ]);
        let config = cli.shell_config();
        assert_eq!(config.lists_dir, PathBuf::from("/tmp/tracks"));
        assert_eq!(config.extension, "tsv");
        assert_eq!(config.history, Some(PathBuf::from("/tmp/hist")));
        assert!(!config.trace_prompt);
    }

    #[test]
    fn test_cli_no_history() {
        let cli = Cli::parse_from(["trash", "--history", "/tmp/hist", "--no-history"]);
        assert_eq!(cli.shell_config().history, None);
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["trash", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
