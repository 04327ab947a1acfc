//! Error types for the shell.

use thiserror::Error;
use trash_store::StoreError;

/// Errors a command can raise.
///
/// None of these end the session: the shell loop reports them and prompts
/// again.
#[derive(Error, Debug)]
pub enum ShellError {
    /// No command with this name is registered.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command or option exists but does nothing yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// A list name or pattern matched more than one list.
    #[error("ambiguous list '{pattern}', matches: {}", matches.join(", "))]
    AmbiguousList {
        pattern: String,
        matches: Vec<String>,
    },

    /// Storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor failure.
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl ShellError {
    /// Short name of the error kind, shown in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            ShellError::UnknownCommand(_) => "UnknownCommand",
            ShellError::NotImplemented(_) => "NotImplemented",
            ShellError::AmbiguousList { .. } => "AmbiguousList",
            ShellError::Store(_) => "StoreError",
            ShellError::Io(_) => "IoError",
            ShellError::Readline(_) => "ReadlineError",
        }
    }
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_message() {
        let err = ShellError::NotImplemented("add");
        assert_eq!(err.kind(), "NotImplemented");
        assert_eq!(err.to_string(), "not implemented: add");

        let err = ShellError::AmbiguousList {
            pattern: "b*".to_string(),
            matches: vec!["bar".to_string(), "baz".to_string()],
        };
        assert_eq!(err.kind(), "AmbiguousList");
        assert_eq!(err.to_string(), "ambiguous list 'b*', matches: bar, baz");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: ShellError = StoreError::InvalidData("bad header".to_string()).into();
        assert_eq!(err.kind(), "StoreError");
        assert_eq!(err.to_string(), "invalid data: bad header");
    }
}
