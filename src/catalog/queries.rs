//! MySQL `information_schema` query text.
//!
//! Callers wiring a MySQL client run these with the schema name bound to the
//! single `?` placeholder, then feed the resulting rows to the pipeline
//! (typically via a [`CatalogSnapshot`](super::CatalogSnapshot)). Column
//! aliases match the field names of the row types in this module.

/// All base table names in a schema.
pub const LIST_TABLES: &str = "\
select table_name
from information_schema.tables
where table_schema = ? and table_type = 'BASE TABLE'";

/// Explicit foreign-key constraint rows.
pub const FOREIGN_KEYS: &str = "\
select distinct
    table_name,
    column_name,
    referenced_table_name,
    referenced_column_name
from information_schema.key_column_usage
where referenced_table_name is not null
  and referenced_column_name is not null
  and table_schema = ?";

/// Index member rows (one per participating column).
pub const INDEXES: &str = "\
select distinct
    table_name,
    index_name,
    non_unique,
    column_name,
    comment
from information_schema.statistics
where table_schema = ?";

/// Trigger definition rows.
pub const TRIGGERS: &str = "\
select distinct
    trigger_name,
    event_manipulation,
    event_object_table,
    action_statement,
    action_timing,
    definer
from information_schema.triggers
where trigger_schema = ?";
