//! Discovery of the lists stored in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use glob_match::glob_match;
use tracing::warn;

use crate::error::{Result, StoreError};

/// A list found in the storage directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// List name: the file name without directory or extension.
    pub name: String,
    /// Full path to the list file.
    pub path: PathBuf,
}

/// Enumerates the lists stored in one directory.
///
/// Every file named `<list>.<extension>` directly inside the directory is a
/// list:
/// ```text
/// lists/
/// ├── books.csv
/// └── games.csv
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    dir: PathBuf,
    extension: String,
}

impl Catalog {
    /// Creates a catalog over `dir` for files with the given extension.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Path a list with the given name would have.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    /// Lists every discoverable list, sorted by name.
    ///
    /// A missing directory yields an empty catalog.
    pub fn list(&self) -> Result<Vec<CatalogEntry>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|source| StoreError::ReadError {
            path: self.dir.clone(),
            source,
        })?;

        let mut lists = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::ReadError {
                path: self.dir.clone(),
                source,
            })?;

            let path = entry.path();
            let is_list = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == self.extension.as_str());
            if !is_list {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(name) if !name.is_empty() => lists.push(CatalogEntry {
                    name: name.to_string(),
                    path: path.clone(),
                }),
                _ => warn!("Skipping list with unreadable name: {:?}", path),
            }
        }

        lists.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(lists)
    }

    /// Names of every discoverable list, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|e| e.name).collect())
    }

    /// Resolves a list name or glob pattern to exactly one list.
    ///
    /// A list named exactly `pattern` always wins, so names containing glob
    /// metacharacters stay loadable.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] when nothing matches and
    /// [`StoreError::Ambiguous`] when more than one list does.
    pub fn resolve(&self, pattern: &str) -> Result<CatalogEntry> {
        let lists = self.list()?;
        if let Some(exact) = lists.iter().find(|e| e.name == pattern) {
            return Ok(exact.clone());
        }

        let mut matches: Vec<CatalogEntry> = lists
            .into_iter()
            .filter(|e| glob_match(pattern, &e.name))
            .collect();

        match matches.len() {
            0 => Err(StoreError::NotFound {
                kind: "list".to_string(),
                id: pattern.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => Err(StoreError::Ambiguous {
                pattern: pattern.to_string(),
                matches: matches.into_iter().map(|e| e.name).collect(),
            }),
        }
    }
}
