//! List storage for TraSH.
//!
//! A list is a CSV file whose first column holds unique entry names and
//! whose remaining columns are named attributes. Lists live side by side in
//! a single directory and are discovered through a [`Catalog`].
//!
//! # Example
//!
//! ```no_run
//! use trash_store::{Catalog, TabularStore};
//!
//! let catalog = Catalog::new("lists", "csv");
//! for entry in catalog.list().unwrap() {
//!     println!("{}", entry.name);
//! }
//!
//! let found = catalog.resolve("books").unwrap();
//! let store = TabularStore::load(&found.path).unwrap();
//! println!("{} entries", store.len());
//! ```

pub mod atomic;
pub mod catalog;
pub mod error;
pub mod table;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{Result, StoreError};
pub use table::{Entry, TabularStore};
