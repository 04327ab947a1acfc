//! The interactive read-eval-print loop.

use std::cell::RefCell;
use std::error::Error as _;
use std::io::{self, Write};
use std::rc::Rc;

use crossterm::style::Stylize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::{debug, error};

use crate::completion::ShellHelper;
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::registry::{self, Flow, EOF_COMMAND};
use crate::session::Session;

const INTRO: &str = "TraSH: A Tracker Shell\n\n\
                     Type 'help' or ? to list commands\n\
                     Type CTRL + D or 'quit' to exit the shell\n";

/// Shell state: the line editor plus the session it edits against.
pub struct Shell {
    editor: Editor<ShellHelper, DefaultHistory>,
    session: Rc<RefCell<Session>>,
    config: ShellConfig,
}

impl Shell {
    /// Creates a shell with no list selected.
    pub fn new(config: ShellConfig) -> Result<Self> {
        let session = Rc::new(RefCell::new(Session::new(config.catalog())));

        let editor_config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut editor = Editor::with_config(editor_config)?;
        editor.set_helper(Some(ShellHelper::new(Rc::clone(&session))));

        if let Some(path) = &config.history {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    debug!("could not load history from {:?}: {}", path, e);
                }
            }
        }

        Ok(Self {
            editor,
            session,
            config,
        })
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// Returns the process exit code: 0 after `quit`, 1 after end of input.
    /// Command errors are reported and never end the loop.
    pub fn run(&mut self) -> Result<u8> {
        println!("{}", INTRO);

        loop {
            let prompt = self.session.borrow().prompt();
            let input = self.editor.readline(&prompt);
            if let Ok(line) = &input {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
            }

            let outcome = {
                let mut stdout = io::stdout().lock();
                let mut session = self.session.borrow_mut();
                let outcome = step(&mut session, input, &mut stdout);
                stdout.flush()?;
                outcome
            };

            match outcome {
                Ok(Step::Continue) => {}
                Ok(Step::Exit(code)) => {
                    self.save_history();
                    return Ok(code);
                }
                Ok(Step::Failed(err)) => self.offer_details(&err),
                Err(err) => {
                    error!("shell loop failed: {}", err);
                    self.save_history();
                    return Err(err);
                }
            }
        }
    }

    /// Asks whether to print the details of a failed command.
    fn offer_details(&mut self, err: &ShellError) {
        if !self.config.trace_prompt {
            return;
        }
        match self.editor.readline("Show details? (y/N) ") {
            Ok(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                println!("{}", error_details(err));
            }
            _ => {}
        }
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.config.history {
            if let Err(e) = self.editor.save_history(path) {
                debug!("could not save history to {:?}: {}", path, e);
            }
        }
    }
}

/// Outcome of one pass through the loop.
#[derive(Debug)]
pub enum Step {
    /// Prompt again.
    Continue,
    /// End the session with this exit code.
    Exit(u8),
    /// The command failed; its summary has been written.
    Failed(ShellError),
}

/// Handles one read from the line editor.
///
/// Lines are dispatched, Ctrl-C prints `^C`, end of input runs the `EOF`
/// command. A failing command is reported to `out` and comes back as
/// [`Step::Failed`]. Only a broken line editor or output stream is an `Err`.
pub fn step(
    session: &mut Session,
    input: std::result::Result<String, ReadlineError>,
    out: &mut dyn Write,
) -> Result<Step> {
    let line = match input {
        Ok(line) => line,
        Err(ReadlineError::Interrupted) => {
            writeln!(out, "^C")?;
            return Ok(Step::Continue);
        }
        Err(ReadlineError::Eof) => EOF_COMMAND.to_string(),
        Err(err) => return Err(err.into()),
    };

    match registry::dispatch(session, &line, out) {
        Ok(Flow::Continue) => Ok(Step::Continue),
        Ok(Flow::Exit(code)) => Ok(Step::Exit(code)),
        Err(err) => {
            write_report(&err, out)?;
            Ok(Step::Failed(err))
        }
    }
}

/// Writes the red `Caught error: <kind>` summary and message.
pub fn write_report(err: &ShellError, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", format!("Caught error: {}", err.kind()).red())?;
    writeln!(out, "{}", err.to_string().red())
}

/// Debug form of an error followed by its chain of causes.
pub fn error_details(err: &ShellError) -> String {
    let mut details = format!("{:#?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        details.push_str(&format!("\ncaused by: {}", cause));
        source = cause.source();
    }
    details
}
