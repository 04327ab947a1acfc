//! The fixed table of shell commands and line dispatch.

use std::io::Write;

use tracing::debug;

use crate::commands;
use crate::completion;
use crate::error::{Result, ShellError};
use crate::session::Session;

/// What the shell loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// End the session with the given process exit code.
    Exit(u8),
}

/// Runs a command with its raw, untokenized arguments.
pub type Handler = fn(&mut Session, &str, &mut dyn Write) -> Result<Flow>;

/// Produces completion candidates for a partially typed argument.
pub type CompleteFn = fn(&Session, &str) -> Vec<String>;

/// A registered command.
pub struct CommandSpec {
    /// Command name (e.g., "load").
    pub name: &'static str,
    /// Short alternative names (e.g., ["ld"]).
    pub aliases: &'static [&'static str],
    /// Usage synopsis.
    pub usage: &'static str,
    /// One-line description.
    pub brief: &'static str,
    /// Detailed description.
    pub description: &'static str,
    pub handler: Handler,
    /// Argument completion, if the command has any.
    pub completer: Option<CompleteFn>,
}

/// Command name dispatched when input ends (Ctrl-D).
pub const EOF_COMMAND: &str = "EOF";

/// Every command the shell understands.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "quit",
        aliases: &[],
        usage: "quit",
        brief: "Exit the shell",
        description: "Exits the shell with a success status.",
        handler: commands::cmd_quit,
        completer: None,
    },
    CommandSpec {
        name: EOF_COMMAND,
        aliases: &[],
        usage: "EOF",
        brief: "Exit the shell on end of input (Ctrl-D)",
        description: "Exits the shell with a failure status. Sent automatically when \
                      input ends.",
        handler: commands::cmd_eof,
        completer: None,
    },
    CommandSpec {
        name: "clear-screen",
        aliases: &["c"],
        usage: "clear-screen",
        brief: "Clear the terminal",
        description: "Clears the terminal and moves the cursor to the top left corner.",
        handler: commands::cmd_clear_screen,
        completer: None,
    },
    CommandSpec {
        name: "load",
        aliases: &["ld"],
        usage: "load [name]",
        brief: "List available lists or load one",
        description: "Without an argument, prints every list found in the list directory.\n\
                      With a name, loads that list and selects it. The name may be a glob \
                      pattern (e.g. 'bo*') as long as it matches exactly one list.",
        handler: commands::cmd_load,
        completer: Some(completion::complete_lists),
    },
    CommandSpec {
        name: "list",
        aliases: &["l"],
        usage: "list {name} [-ip]",
        brief: "Show entries of the selected list",
        description: "Without arguments, prints every entry of the selected list.\n\
                      With names, prints only the entries with those names.\n\n\
                      -i  Ignore case when matching names (not implemented)\n\
                      -p  Match names by prefix (not implemented)",
        handler: commands::cmd_list,
        completer: Some(completion::complete_entries),
    },
    CommandSpec {
        name: "add",
        aliases: &["a"],
        usage: "add [name]",
        brief: "Add an entry to the selected list",
        description: "Adds an entry to the selected list, optionally with just the given name.",
        handler: commands::cmd_add,
        completer: None,
    },
    CommandSpec {
        name: "delete",
        aliases: &["d"],
        usage: "delete <name> {name}",
        brief: "Delete entries from the selected list",
        description: "Deletes the entries with the given names from the selected list.",
        handler: commands::cmd_delete,
        completer: Some(completion::complete_entries),
    },
    CommandSpec {
        name: "filter",
        aliases: &["f"],
        usage: "filter {key=value}",
        brief: "Filter the selected list",
        description: "Reserved for filter expressions. Accepts any input and does nothing yet.",
        handler: commands::cmd_filter,
        completer: None,
    },
    CommandSpec {
        name: "help",
        aliases: &["?"],
        usage: "help [command]",
        brief: "Show help",
        description: "Lists all commands, or shows detailed help for one command or alias.",
        handler: commands::cmd_help,
        completer: Some(completion::complete_commands),
    },
];

/// Looks up a command by exact, case-sensitive name or alias.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|c| c.name == name || c.aliases.contains(&name))
}

/// Names of all commands in registry order, aliases excluded.
pub fn command_names() -> Vec<String> {
    COMMANDS.iter().map(|c| c.name.to_string()).collect()
}

/// Splits a line into its command token and the raw remainder.
///
/// A leading `?` is shorthand for `help`, so `?load` asks for help on `load`.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('?') {
        return ("help", rest.trim());
    }
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    }
}

/// Parses and runs one input line against the session.
///
/// Blank lines do nothing.
pub fn dispatch(session: &mut Session, line: &str, out: &mut dyn Write) -> Result<Flow> {
    if line.trim().is_empty() {
        return Ok(Flow::Continue);
    }

    let (name, args) = split_command(line);
    let spec = find(name).ok_or_else(|| ShellError::UnknownCommand(name.to_string()))?;

    debug!(command = spec.name, args, "Dispatching command");
    (spec.handler)(session, args, out)
}
