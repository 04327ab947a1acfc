//! Tab completion.
//!
//! The first word of a line completes to command names. Later words complete
//! through the command's own completer, which draws its candidates from the
//! session. Completion never changes the session and never fails: anything
//! that goes wrong just yields no candidates.

use std::cell::RefCell;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing::debug;

use crate::registry;
use crate::session::Session;

/// Members of `pool` starting with `partial`, in pool order.
///
/// An empty `partial` returns the whole pool.
pub fn filter_prefix(pool: &[String], partial: &str) -> Vec<String> {
    pool.iter()
        .filter(|candidate| candidate.starts_with(partial))
        .cloned()
        .collect()
}

/// Completes list names from a fresh scan of the list directory.
pub fn complete_lists(session: &Session, partial: &str) -> Vec<String> {
    match session.catalog().names() {
        Ok(names) => filter_prefix(&names, partial),
        Err(e) => {
            debug!("catalog scan failed during completion: {}", e);
            Vec::new()
        }
    }
}

/// Completes entry names of the selected list.
pub fn complete_entries(session: &Session, partial: &str) -> Vec<String> {
    session
        .store()
        .map(|store| filter_prefix(&store.names(), partial))
        .unwrap_or_default()
}

/// Completes command names.
pub fn complete_commands(_session: &Session, partial: &str) -> Vec<String> {
    filter_prefix(&registry::command_names(), partial)
}

/// Completes the word ending at byte offset `pos` of `line`.
///
/// Returns the offset where the completed word starts and the candidates
/// that may replace it.
pub fn complete_line(session: &Session, line: &str, pos: usize) -> (usize, Vec<String>) {
    let Some(head) = line.get(..pos) else {
        return (pos, Vec::new());
    };
    let start = head
        .rfind(|c: char| c.is_ascii_whitespace())
        .map(|i| i + 1)
        .unwrap_or(0);

    // A leading `?` is `help`, with everything after it as arguments
    let (start, command) = match head.strip_prefix('?') {
        Some(_) => (start.max(1), Some("help")),
        None => (start, head[..start].split_whitespace().next()),
    };
    let partial = &head[start..];

    let Some(command) = command else {
        return (start, complete_commands(session, partial));
    };

    let candidates = registry::find(command)
        .and_then(|spec| spec.completer)
        .map(|complete| complete(session, partial))
        .unwrap_or_default();
    (start, candidates)
}

/// Line editor helper that completes against the live session.
pub struct ShellHelper {
    session: Rc<RefCell<Session>>,
}

impl ShellHelper {
    pub fn new(session: Rc<RefCell<Session>>) -> Self {
        Self { session }
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let Ok(session) = self.session.try_borrow() else {
            return Ok((pos, Vec::new()));
        };

        let (start, candidates) = complete_line(&session, line, pos);
        let pairs = candidates
            .into_iter()
            .map(|c| Pair {
                display: c.clone(),
                replacement: c,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}
impl Validator for ShellHelper {}
impl Helper for ShellHelper {}
