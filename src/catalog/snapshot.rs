//! JSON snapshot catalog reader.
//!
//! A `CatalogSnapshot` is a serialized dump of the catalog rows the pipeline
//! needs, typically produced by running the [`queries`](super::queries)
//! statements against a MySQL server and saving the results. It doubles as
//! the fixture mechanism for integration tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::reader::{CatalogError, CatalogReader, CatalogResult};
use super::rows::{ColumnRow, ForeignKeyRow, IndexRow, TriggerRow};

/// A complete catalog dump for one schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Table names in catalog order.
    pub tables: Vec<String>,

    /// Column rows keyed by table name.
    #[serde(default)]
    pub columns: HashMap<String, Vec<ColumnRow>>,

    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyRow>,

    #[serde(default)]
    pub indexes: Vec<IndexRow>,

    #[serde(default)]
    pub triggers: Vec<TriggerRow>,

    /// Newest applied migration, if the dump included one.
    #[serde(default)]
    pub latest_migration: Option<String>,
}

/// Catalog reader over an in-memory snapshot.
pub struct SnapshotCatalog {
    snapshot: CatalogSnapshot,
}

impl SnapshotCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot =
            serde_json::from_str(&text).map_err(|source| CatalogError::SnapshotParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(snapshot))
    }
}

impl CatalogReader for SnapshotCatalog {
    fn list_tables(&self) -> CatalogResult<Vec<String>> {
        Ok(self.snapshot.tables.clone())
    }

    fn table_columns(&self, table: &str) -> CatalogResult<Vec<ColumnRow>> {
        Ok(self.snapshot.columns.get(table).cloned().unwrap_or_default())
    }

    fn foreign_keys(&self) -> CatalogResult<Vec<ForeignKeyRow>> {
        Ok(self.snapshot.foreign_keys.clone())
    }

    fn indexes(&self) -> CatalogResult<Vec<IndexRow>> {
        Ok(self.snapshot.indexes.clone())
    }

    fn triggers(&self) -> CatalogResult<Vec<TriggerRow>> {
        Ok(self.snapshot.triggers.clone())
    }

    fn latest_migration(&self, _table: &str) -> CatalogResult<Option<String>> {
        Ok(self.snapshot.latest_migration.clone())
    }
}
