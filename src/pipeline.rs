//! The documentation pipeline.
//!
//! One atomic, synchronous run: read the catalog, filter the table list,
//! resolve relationships, annotate columns, emit documents. Any catalog or
//! registry failure aborts the whole run before anything is written; the
//! migration lookup is the only best-effort step.

use std::collections::HashSet;

use regex::Regex;

use crate::catalog::CatalogReader;
use crate::config::{Config, ConfigError};
use crate::emit::{self, DocumentSet};
use crate::error::DocResult;
use crate::model::{self, AnnotateOptions, SchemaModel};

/// Per-run settings, derived from [`Config`].
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Exact table names to exclude.
    pub ignore_tables: Vec<String>,
    /// Compiled ignore pattern.
    pub ignore_regex: Option<Regex>,
    /// Migration-tracking table name.
    pub migration_table: String,
    /// Column annotation settings.
    pub annotate: AnnotateOptions,
}

impl RunOptions {
    /// Build run options from configuration, compiling the ignore regex.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            ignore_tables: config.tables.ignore.clone(),
            ignore_regex: config.ignore_regex()?,
            migration_table: config.migrations.table.clone(),
            annotate: AnnotateOptions {
                sentinel_lengths: config.display.sentinel_lengths.clone(),
            },
        })
    }
}

/// Build the complete document set for one schema.
pub fn run(
    reader: &dyn CatalogReader,
    options: &RunOptions,
    schema: &str,
) -> DocResult<DocumentSet> {
    let all_tables = reader.list_tables()?;
    let admitted = model::admit(
        schema,
        &all_tables,
        &options.ignore_tables,
        options.ignore_regex.as_ref(),
    )?;

    let mut tables = model::resolve(
        &admitted,
        reader.foreign_keys()?,
        reader.indexes()?,
        reader.triggers()?,
    );

    let admitted_set: HashSet<String> = admitted.iter().cloned().collect();
    for table in &mut tables {
        let rows = reader.table_columns(&table.name)?;
        let columns = rows
            .into_iter()
            .map(|row| {
                let explicit = table.foreign_keys.get(&row.name);
                model::annotate(row, explicit, &admitted_set, &options.annotate)
            })
            .collect();
        table.columns = columns;
    }

    // Best-effort: a failed migration lookup never fails the run.
    let latest_migration = match reader.latest_migration(&options.migration_table) {
        Ok(migration) => migration,
        Err(err) => {
            log::warn!("migration lookup failed: {err}");
            None
        }
    };

    log::debug!("built model for {} tables in {schema}", tables.len());
    let model = SchemaModel {
        schema: schema.to_string(),
        tables,
        latest_migration,
    };
    Ok(emit::emit(model))
}
