//! Scripted sessions driven through the command dispatcher.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use trash_cli::completion::complete_line;
use trash_cli::shell::{step, Step};
use trash_cli::{Session, ShellError};
use trash_store::Catalog;

fn write_list(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(format!("{}.csv", name)), content).unwrap();
}

/// Feeds lines through the shell's loop step until one ends the session.
fn run_script(session: &mut Session, lines: &[&str]) -> (String, Vec<ShellError>, Option<u8>) {
    let mut out = Vec::new();
    let mut errors = Vec::new();
    for line in lines {
        match step(session, Ok(line.to_string()), &mut out).unwrap() {
            Step::Continue => {}
            Step::Exit(code) => return (String::from_utf8(out).unwrap(), errors, Some(code)),
            Step::Failed(e) => errors.push(e),
        }
    }
    (String::from_utf8(out).unwrap(), errors, None)
}

#[test]
fn test_session_recovers_from_errors() {
    let dir = tempdir().unwrap();
    write_list(dir.path(), "games", "name,platform\nzelda,switch\ndoom,pc\n");
    let mut session = Session::new(Catalog::new(dir.path(), "csv"));

    let (output, errors, exit) = run_script(
        &mut session,
        &[
            "list",
            "bogus",
            "load games",
            "add mario",
            "list -p z",
            "delete doom",
            "list doom",
            "quit",
            "list zelda",
        ],
    );

    assert_eq!(exit, Some(0));
    assert_eq!(errors.len(), 4);
    assert!(matches!(errors[0], ShellError::UnknownCommand(_)));
    assert!(matches!(errors[1], ShellError::NotImplemented("add")));
    assert!(matches!(errors[2], ShellError::NotImplemented("list flags")));
    assert!(matches!(errors[3], ShellError::NotImplemented("delete")));

    // Only the last list before quit produced a table
    assert!(output.contains("doom"));
    assert!(!output.contains("zelda"));
    assert_eq!(output.matches("Caught error: ").count(), 4);
    assert_eq!(session.selected(), Some("games"));
    assert_eq!(session.store().unwrap().len(), 2);
}

#[test]
fn test_catalog_listing_feeds_completion() {
    let dir = tempdir().unwrap();
    write_list(dir.path(), "abc", "name\n");
    write_list(dir.path(), "abd", "name\n");
    write_list(dir.path(), "xyz", "name\n");
    let mut session = Session::new(Catalog::new(dir.path(), "csv"));

    let (output, errors, _) = run_script(&mut session, &["load"]);
    assert!(errors.is_empty());
    assert_eq!(output.matches("└──").count(), 3);
    assert_eq!(session.candidates(), ["abc", "abd", "xyz"]);

    let (start, candidates) = complete_line(&session, "load ab", 7);
    assert_eq!(start, 5);
    assert_eq!(candidates, vec!["abc".to_string(), "abd".to_string()]);

    let (_, candidates) = complete_line(&session, "load ", 5);
    assert_eq!(candidates.len(), 3);
}

#[test]
fn test_switching_lists_updates_completion() {
    let dir = tempdir().unwrap();
    write_list(dir.path(), "books", "title,author\ndune,Herbert\n");
    write_list(dir.path(), "games", "name,platform\ndoom,pc\n");
    let mut session = Session::new(Catalog::new(dir.path(), "csv"));

    run_script(&mut session, &["ld books"]);
    assert_eq!(complete_line(&session, "l d", 3).1, vec!["dune".to_string()]);

    run_script(&mut session, &["ld games"]);
    assert_eq!(session.selected(), Some("games"));
    assert_eq!(complete_line(&session, "l d", 3).1, vec!["doom".to_string()]);

    // A failed load leaves the previous list selected
    let (output, errors, _) = run_script(&mut session, &["ld movies"]);
    assert!(errors.is_empty());
    assert!(output.contains("Cannot open"));
    assert_eq!(session.selected(), Some("games"));
}

#[test]
fn test_end_of_input_exits_with_failure() {
    let mut session = Session::new(Catalog::new("/nonexistent", "csv"));
    let (output, errors, exit) = run_script(&mut session, &["EOF"]);

    assert!(errors.is_empty());
    assert_eq!(exit, Some(1));
    assert!(output.contains("Exiting..."));
}
