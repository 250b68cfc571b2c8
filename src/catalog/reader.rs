//! The `CatalogReader` trait.
//!
//! Abstracts over where catalog metadata comes from: a live SQLite file, a
//! JSON snapshot of a MySQL `information_schema` dump, or an in-memory
//! fixture in tests. Readers are constructed with their connection or source
//! and injected into the pipeline; there is no ambient connection registry.

use std::path::PathBuf;

use super::rows::{ColumnRow, ForeignKeyRow, IndexRow, TriggerRow};

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error raised by a catalog reader.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{0}")]
    Query(#[from] rusqlite::Error),

    #[error("could not read catalog snapshot \"{path}\": {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog snapshot \"{path}\": {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to a database's metadata catalog.
///
/// All methods are synchronous; the pipeline issues them sequentially and
/// treats any error as fatal to the whole run. The one exception is
/// `latest_migration`, which the pipeline consumes best-effort.
pub trait CatalogReader {
    /// All table names in the schema, in catalog order.
    fn list_tables(&self) -> CatalogResult<Vec<String>>;

    /// Column definitions for one table, in ordinal order.
    fn table_columns(&self, table: &str) -> CatalogResult<Vec<ColumnRow>>;

    /// Every explicit foreign-key constraint row in the schema.
    fn foreign_keys(&self) -> CatalogResult<Vec<ForeignKeyRow>>;

    /// Every index member row in the schema.
    fn indexes(&self) -> CatalogResult<Vec<IndexRow>>;

    /// Every trigger row in the schema, in catalog order.
    fn triggers(&self) -> CatalogResult<Vec<TriggerRow>>;

    /// Newest row of the migration-tracking table, if that table exists.
    ///
    /// Returns `Ok(None)` when the table is absent. Used only to surface the
    /// latest applied migration on the summary page.
    fn latest_migration(&self, table: &str) -> CatalogResult<Option<String>>;
}
