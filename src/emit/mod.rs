//! Document model emitter.
//!
//! Consumes the finished `SchemaModel` and assembles the per-page document
//! data the renderer works from. Documents are plain serializable structs so
//! renderers other than the bundled HTML one can consume them.

use serde::Serialize;

use crate::model::{Index, SchemaModel, Table, Trigger};

/// Everything a renderer needs for one run.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSet {
    pub summary: SummaryDoc,
    pub table_list: TableListDoc,
    /// One document per admitted table, in registry order.
    pub tables: Vec<TableDoc>,
    pub indexes: IndexesDoc,
    pub triggers: TriggersDoc,
}

/// Summary page data.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDoc {
    pub schema: String,
    /// Newest applied migration, when known.
    pub latest_migration: Option<String>,
}

/// The admitted table names, in order.
#[derive(Debug, Clone, Serialize)]
pub struct TableListDoc {
    pub table_names: Vec<String>,
}

/// Per-table page data.
#[derive(Debug, Clone, Serialize)]
pub struct TableDoc {
    pub table: Table,
}

/// Global index page data.
#[derive(Debug, Clone, Serialize)]
pub struct IndexesDoc {
    pub tables: Vec<TableIndexes>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableIndexes {
    pub table: String,
    pub indexes: Vec<Index>,
}

/// Global trigger page data.
#[derive(Debug, Clone, Serialize)]
pub struct TriggersDoc {
    pub tables: Vec<TableTriggers>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableTriggers {
    pub table: String,
    pub triggers: Vec<Trigger>,
}

/// Assemble the document set. Takes the model by value: emission is the end
/// of the model's lifecycle.
pub fn emit(model: SchemaModel) -> DocumentSet {
    let summary = SummaryDoc {
        schema: model.schema,
        latest_migration: model.latest_migration,
    };

    let table_list = TableListDoc {
        table_names: model.tables.iter().map(|t| t.name.clone()).collect(),
    };

    let indexes = IndexesDoc {
        tables: model
            .tables
            .iter()
            .map(|t| TableIndexes {
                table: t.name.clone(),
                indexes: t.indexes.clone(),
            })
            .collect(),
    };

    let triggers = TriggersDoc {
        tables: model
            .tables
            .iter()
            .map(|t| TableTriggers {
                table: t.name.clone(),
                triggers: t.triggers.clone(),
            })
            .collect(),
    };

    let tables = model
        .tables
        .into_iter()
        .map(|table| TableDoc { table })
        .collect();

    DocumentSet {
        summary,
        table_list,
        tables,
        indexes,
        triggers,
    }
}
