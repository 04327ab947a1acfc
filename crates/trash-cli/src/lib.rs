//! TraSH: an interactive shell for tracking lists.
//!
//! Lists are CSV files in one directory. The shell loads one of them into a
//! [`session::Session`] and runs commands from the fixed
//! [`registry::COMMANDS`] table against it, with tab completion drawn from
//! the same session.

pub mod cli;
pub mod commands;
pub mod completion;
pub mod config;
pub mod error;
pub mod registry;
pub mod session;
pub mod shell;
pub mod table;

pub use error::{Result, ShellError};
pub use registry::{dispatch, Flow};
pub use session::Session;
pub use shell::Shell;
