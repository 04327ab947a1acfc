//! Mutable state shared by the commands of one shell session.

use crossterm::style::Stylize;
use trash_store::{Catalog, TabularStore};

/// The shell's working context.
///
/// Handlers receive it mutably, completers read it. A list is only ever
/// replaced as a whole, so a failed load leaves the previous selection
/// intact.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    selected: Option<String>,
    store: Option<TabularStore>,
    candidates: Vec<String>,
}

impl Session {
    /// Creates a session with no list selected.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
            store: None,
            candidates: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Name of the selected list.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The loaded list, if any.
    pub fn store(&self) -> Option<&TabularStore> {
        self.store.as_ref()
    }

    /// List names recorded by the last catalog listing.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
    }

    /// Makes `store` the active list under `name`.
    pub fn select(&mut self, name: String, store: TabularStore) {
        self.selected = Some(name);
        self.store = Some(store);
    }

    /// Prompt showing the selected list: `trash$ ` or `trash:<list>$ `.
    pub fn prompt(&self) -> String {
        match &self.selected {
            Some(name) => format!("{}:{}$ ", "trash".green(), name.as_str().blue()),
            None => format!("{}$ ", "trash".green()),
        }
    }
}
