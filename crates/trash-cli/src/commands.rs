//! Command handlers.
//!
//! Each handler receives the raw argument string and does its own
//! tokenization.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use tracing::{debug, info};
use trash_store::{Entry, StoreError, TabularStore};

use crate::error::{Result, ShellError};
use crate::registry::{self, Flow, COMMANDS};
use crate::session::Session;
use crate::table;

pub fn cmd_quit(_session: &mut Session, _args: &str, out: &mut dyn Write) -> Result<Flow> {
    writeln!(out, "Exiting...\n")?;
    Ok(Flow::Exit(0))
}

/// End of input is treated as an abnormal exit.
pub fn cmd_eof(_session: &mut Session, _args: &str, out: &mut dyn Write) -> Result<Flow> {
    writeln!(out, "^D\nExiting...\n")?;
    Ok(Flow::Exit(1))
}

pub fn cmd_clear_screen(_session: &mut Session, _args: &str, out: &mut dyn Write) -> Result<Flow> {
    out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    out.flush()?;
    Ok(Flow::Continue)
}

/// `load [name]`: prints the catalog, or loads and selects one list.
///
/// A name that matches no list only prints a diagnostic. A pattern that
/// matches several lists is an error. Either way the current selection is
/// kept.
pub fn cmd_load(session: &mut Session, args: &str, out: &mut dyn Write) -> Result<Flow> {
    let Some(pattern) = args.split_whitespace().next() else {
        let names = session.catalog().names()?;
        writeln!(out, "{}", session.catalog().dir().display())?;
        for name in &names {
            writeln!(out, "└──{}", name)?;
        }
        session.set_candidates(names);
        return Ok(Flow::Continue);
    };

    let found = match session.catalog().resolve(pattern) {
        Ok(found) => found,
        Err(StoreError::NotFound { .. }) => {
            let path = session.catalog().path_for(pattern);
            writeln!(out, "Cannot open '{}'", path.display())?;
            return Ok(Flow::Continue);
        }
        Err(StoreError::Ambiguous { pattern, matches }) => {
            return Err(ShellError::AmbiguousList { pattern, matches });
        }
        Err(e) => return Err(e.into()),
    };

    match TabularStore::load(&found.path) {
        Ok(store) => {
            info!(list = %found.name, entries = store.len(), "Loaded list");
            session.select(found.name, store);
        }
        // Removed between the catalog scan and the read
        Err(StoreError::NotFound { .. }) => {
            writeln!(out, "Cannot open '{}'", found.path.display())?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(Flow::Continue)
}

/// `list {name} [-ip]`: prints the selected list, or the named entries.
pub fn cmd_list(session: &mut Session, args: &str, out: &mut dyn Write) -> Result<Flow> {
    let Some(store) = session.store() else {
        return Ok(Flow::Continue);
    };

    let names: Vec<&str> = args.split_whitespace().collect();
    if names.is_empty() {
        let rows: Vec<&Entry> = store.entries().iter().collect();
        writeln!(out, "{}", table::render(store, &rows))?;
        return Ok(Flow::Continue);
    }

    if names.iter().any(|n| n.starts_with('-')) {
        return Err(ShellError::NotImplemented("list flags"));
    }

    let rows = store.select(&names);
    if rows.is_empty() {
        writeln!(out, "No matching entries")?;
    } else {
        writeln!(out, "{}", table::render(store, &rows))?;
    }
    Ok(Flow::Continue)
}

pub fn cmd_add(_session: &mut Session, _args: &str, _out: &mut dyn Write) -> Result<Flow> {
    Err(ShellError::NotImplemented("add"))
}

pub fn cmd_delete(_session: &mut Session, _args: &str, _out: &mut dyn Write) -> Result<Flow> {
    Err(ShellError::NotImplemented("delete"))
}

pub fn cmd_filter(_session: &mut Session, args: &str, _out: &mut dyn Write) -> Result<Flow> {
    debug!(args, "filter accepted, nothing to apply");
    Ok(Flow::Continue)
}

/// `help [command]`: command overview, or details for one command.
pub fn cmd_help(_session: &mut Session, args: &str, out: &mut dyn Write) -> Result<Flow> {
    let Some(topic) = args.split_whitespace().next() else {
        writeln!(out, "Documented commands (type help <command>):")?;
        for spec in COMMANDS {
            writeln!(out, "  {:<14} {}", spec.name, spec.brief)?;
        }
        return Ok(Flow::Continue);
    };

    let Some(spec) = registry::find(topic) else {
        writeln!(out, "No help for '{}'", topic)?;
        return Ok(Flow::Continue);
    };

    writeln!(out, "{}\n", spec.usage)?;
    writeln!(out, "{}", spec.description)?;
    if !spec.aliases.is_empty() {
        writeln!(out, "\nAliases: {}", spec.aliases.join(", "))?;
    }
    Ok(Flow::Continue)
}
