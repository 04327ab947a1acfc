//! In-memory tabular lists.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::atomic::atomic_write;
use crate::error::{Result, StoreError};

/// One row of a list: a unique name plus its attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    values: Vec<String>,
}

impl Entry {
    /// Creates an entry from its name and attribute values.
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The entry's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute values in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value of the attribute column at `column`, if present.
    pub fn value(&self, column: usize) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// A named list of entries backed by a CSV file.
///
/// The first CSV column is the index: it holds each entry's name and must be
/// unique. The remaining columns are attributes. Rows keep the order they
/// have in the file.
#[derive(Debug, Clone)]
pub struct TabularStore {
    name: String,
    path: PathBuf,
    index_header: String,
    columns: Vec<String>,
    rows: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl TabularStore {
    /// Creates an empty list with the given schema.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        index_header: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            index_header: index_header.into(),
            columns,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Loads a list from a CSV file.
    ///
    /// The list is named after the file stem.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if the file does not exist,
    /// [`StoreError::Csv`] for malformed CSV and [`StoreError::InvalidData`]
    /// for a missing header or duplicate entry names.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(StoreError::NotFound {
                kind: "list".to_string(),
                id: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|source| StoreError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let csv_err = |source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        let mut headers = headers.iter().map(str::to_string);
        let index_header = headers
            .next()
            .ok_or_else(|| StoreError::InvalidData(format!("{} has no header", path.display())))?;
        let columns: Vec<String> = headers.collect();

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut store = Self::new(name, path, index_header, columns);

        for record in reader.records() {
            let record = record.map_err(csv_err)?;
            let mut fields = record.iter();
            let entry_name = fields.next().unwrap_or_default();
            store.insert(Entry::new(entry_name, fields.map(str::to_string).collect()))?;
        }

        debug!(list = %store.name, rows = store.len(), "Parsed list");
        Ok(store)
    }

    /// Writes the list back to `path` as CSV, atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        let csv_err = |source| StoreError::Csv {
            path: path.to_path_buf(),
            source,
        };

        writer
            .write_record(std::iter::once(&self.index_header).chain(&self.columns))
            .map_err(csv_err)?;
        for entry in &self.rows {
            writer
                .write_record(std::iter::once(&entry.name).chain(&entry.values))
                .map_err(csv_err)?;
        }

        let data = writer.into_inner().map_err(|e| StoreError::WriteError {
            path: path.to_path_buf(),
            source: e.into_error(),
        })?;
        atomic_write(path, &data)
    }

    /// Appends an entry.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidData`] if an entry with the same name
    /// already exists.
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if self.index.contains_key(&entry.name) {
            return Err(StoreError::InvalidData(format!(
                "duplicate entry '{}' in list '{}'",
                entry.name, self.name
            )));
        }
        self.index.insert(entry.name.clone(), self.rows.len());
        self.rows.push(entry);
        Ok(())
    }

    /// The list name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file this list was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header of the index (name) column.
    pub fn index_header(&self) -> &str {
        &self.index_header
    }

    /// Attribute column headers, excluding the index column.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All entries in storage order.
    pub fn entries(&self) -> &[Entry] {
        &self.rows
    }

    /// Entry names in storage order.
    pub fn names(&self) -> Vec<String> {
        self.rows.iter().map(|e| e.name.clone()).collect()
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries whose name is one of `names`, in storage order.
    ///
    /// Names with no matching entry are ignored.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Entry> {
        let wanted: HashSet<&str> = names.iter().map(AsRef::as_ref).collect();
        self.rows
            .iter()
            .filter(|e| wanted.contains(e.name.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const BOOKS: &str = "title,author,year\n\
                         dune,Herbert,1965\n\
                         emma,Austen,1815\n\
                         ulysses,Joyce,1922\n";

    fn write_list(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(format!("{}.csv", name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_parses_schema_and_rows() {
        let dir = tempdir().unwrap();
        let path = write_list(dir.path(), "books", BOOKS);

        let store = TabularStore::load(&path).unwrap();

        assert_eq!(store.name(), "books");
        assert_eq!(store.index_header(), "title");
        assert_eq!(store.columns(), ["author", "year"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.names(), vec!["dune", "emma", "ulysses"]);
        assert_eq!(store.get("emma").unwrap().value(0), Some("Austen"));
        assert_eq!(store.get("emma").unwrap().value(1), Some("1815"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = TabularStore::load(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_load_rejects_duplicate_names() {
        let dir = tempdir().unwrap();
        let path = write_list(dir.path(), "dups", "name,v\na,1\na,2\n");

        let result = TabularStore::load(&path);
        assert!(matches!(result, Err(StoreError::InvalidData(_))));
    }

    #[test]
    fn test_load_rejects_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = write_list(dir.path(), "ragged", "name,v\na,1,extra\n");

        let result = TabularStore::load(&path);
        assert!(matches!(result, Err(StoreError::Csv { .. })));
    }

    #[test]
    fn test_load_header_only() {
        let dir = tempdir().unwrap();
        let path = write_list(dir.path(), "empty", "name,status\n");

        let store = TabularStore::load(&path).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.columns(), ["status"]);
    }

    #[test]
    fn test_select_keeps_storage_order_and_drops_unknown() {
        let dir = tempdir().unwrap();
        let store = TabularStore::load(&write_list(dir.path(), "books", BOOKS)).unwrap();

        let rows = store.select(&["ulysses", "missing", "dune"]);
        let names: Vec<&str> = rows.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["dune", "ulysses"]);

        assert!(store.select(&["missing"]).is_empty());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();
        let original = write_list(
            dir.path(),
            "notes",
            "name,text\nfirst,\"comma, inside\"\nsecond,\"quote \"\"here\"\"\"\n",
        );
        let store = TabularStore::load(&original).unwrap();

        let copy = dir.path().join("copy.csv");
        store.save(&copy).unwrap();
        let reloaded = TabularStore::load(&copy).unwrap();

        assert_eq!(reloaded.index_header(), store.index_header());
        assert_eq!(reloaded.columns(), store.columns());
        assert_eq!(reloaded.entries(), store.entries());
        assert_eq!(reloaded.get("first").unwrap().value(0), Some("comma, inside"));
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut store = TabularStore::new("t", "t.csv", "name", vec!["v".to_string()]);
        store.insert(Entry::new("a", vec!["1".to_string()])).unwrap();

        assert!(store.insert(Entry::new("a", vec!["2".to_string()])).is_err());
        assert_eq!(store.len(), 1);
        assert!(store.contains("a"));
    }
}
