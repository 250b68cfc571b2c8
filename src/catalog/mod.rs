//! Catalog access: typed rows, the reader trait, and shipped readers.
//!
//! This is the pipeline's pure I/O boundary. Nothing here interprets the
//! schema; it only fetches rows and validates their shape.

pub mod queries;
mod reader;
mod rows;
mod snapshot;
mod sqlite;

pub use reader::{CatalogError, CatalogReader, CatalogResult};
pub use rows::{ColumnRow, ForeignKeyRow, IndexRow, TriggerRow};
pub use snapshot::{CatalogSnapshot, SnapshotCatalog};
pub use sqlite::SqliteCatalog;
