//! The in-memory schema model.
//!
//! Built fresh on every run from a live catalog snapshot: the registry
//! decides which tables are in scope, the resolver attaches constraints,
//! indexes and triggers, and the annotator derives the display fields. Once
//! emission begins the model is consumed by value and never mutated again.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ColumnRow;

mod annotate;
mod registry;
mod resolve;

pub use annotate::{annotate, AnnotateOptions, DEFAULT_SENTINEL_LENGTHS};
pub use registry::admit;
pub use resolve::{infer_parent, resolve};

/// The complete documented schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaModel {
    /// Schema (database) name.
    pub schema: String,
    /// Admitted tables in registry order.
    pub tables: Vec<Table>,
    /// Newest applied migration, when the tracking table exists.
    pub latest_migration: Option<String>,
}

/// One documented table.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub name: String,
    /// Columns in catalog ordinal order, annotated.
    pub columns: Vec<Column>,
    /// Indexes in order of first appearance in the catalog.
    pub indexes: Vec<Index>,
    /// Explicit foreign-key constraints keyed by local column name.
    /// Heuristic guesses never land here.
    pub foreign_keys: HashMap<String, ForeignKey>,
    /// Triggers in catalog order.
    pub triggers: Vec<Trigger>,
}

impl Table {
    /// An empty table shell for the resolver to populate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: HashMap::new(),
            triggers: Vec::new(),
        }
    }
}

/// An explicit foreign-key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

/// A reference to a column of another table, either declared or inferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnReference {
    pub table: String,
    pub column: String,
}

/// One index, with its member columns merged in row order.
#[derive(Debug, Clone, Serialize)]
pub struct Index {
    pub name: String,
    pub columns: Vec<IndexColumn>,
}

/// Per-column index metadata.
#[derive(Debug, Clone, Serialize)]
pub struct IndexColumn {
    pub name: String,
    pub unique: bool,
    pub comment: String,
}

/// One trigger.
#[derive(Debug, Clone, Serialize)]
pub struct Trigger {
    pub name: String,
    /// Event type (`INSERT`, `UPDATE`, `DELETE`).
    pub event: String,
    pub table: String,
    pub statement: String,
    /// `BEFORE`, `AFTER` or `INSTEAD OF`.
    pub timing: String,
    pub definer: String,
}

/// Badge flags shown next to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    /// Primary key.
    Pk,
    /// Unique index.
    Ui,
    /// Auto-increment.
    Ai,
    /// Foreign key, explicit or inferred.
    Fk,
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::Pk => write!(f, "PK"),
            Badge::Ui => write!(f, "UI"),
            Badge::Ai => write!(f, "AI"),
            Badge::Fk => write!(f, "FK"),
        }
    }
}

/// An annotated column: the raw catalog row plus the derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    /// The catalog row as ingested.
    pub raw: ColumnRow,
    /// Type string for display; enums render with their option list.
    pub display_type: String,
    /// First non-sentinel length candidate, if any.
    pub display_length: Option<String>,
    /// Badge flags in display order.
    pub badges: Vec<Badge>,
    /// Declared or inferred reference to a parent column.
    pub resolved_foreign_key: Option<ColumnReference>,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.raw.name
    }
}
