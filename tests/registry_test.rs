//! Table filtering through the full pipeline: the ignore list and ignore
//! regex remove tables everywhere, and nothing re-admits them.

use std::collections::HashMap;

use regex::Regex;

use schemadoc::catalog::{CatalogSnapshot, ColumnRow, IndexRow, SnapshotCatalog, TriggerRow};
use schemadoc::{pipeline, DocError, RunOptions};

fn column(name: &str) -> ColumnRow {
    ColumnRow {
        name: name.to_string(),
        declared_type: "int".to_string(),
        ..ColumnRow::default()
    }
}

fn snapshot() -> CatalogSnapshot {
    let mut columns = HashMap::new();
    for table in ["users", "sessions", "tmp_import"] {
        columns.insert(table.to_string(), vec![column("id")]);
    }
    CatalogSnapshot {
        tables: vec![
            "users".to_string(),
            "sessions".to_string(),
            "tmp_import".to_string(),
        ],
        columns,
        ..CatalogSnapshot::default()
    }
}

#[test]
fn test_ignore_list_and_regex_exclude_tables() {
    let options = RunOptions {
        ignore_tables: vec!["sessions".to_string()],
        ignore_regex: Some(Regex::new("^tmp_").unwrap()),
        ..RunOptions::default()
    };
    let reader = SnapshotCatalog::new(snapshot());
    let docs = pipeline::run(&reader, &options, "app").unwrap();
    assert_eq!(docs.table_list.table_names, vec!["users"]);
}

#[test]
fn test_empty_admitted_set_fails_with_empty_schema() {
    let options = RunOptions {
        ignore_regex: Some(Regex::new(".").unwrap()),
        ..RunOptions::default()
    };
    let reader = SnapshotCatalog::new(snapshot());
    let err = pipeline::run(&reader, &options, "app").unwrap_err();
    assert!(matches!(err, DocError::EmptySchema { .. }));
}

#[test]
fn test_rows_on_excluded_tables_are_dropped_silently() {
    let mut snap = snapshot();
    // An index and a trigger on an ignored table must vanish, not error.
    snap.indexes.push(IndexRow {
        table_name: "sessions".to_string(),
        index_name: "idx_token".to_string(),
        non_unique: 0,
        column_name: "token".to_string(),
        comment: String::new(),
    });
    snap.triggers.push(TriggerRow {
        trigger_name: "trg_sessions_expire".to_string(),
        event_manipulation: "INSERT".to_string(),
        event_object_table: "sessions".to_string(),
        action_statement: "delete from sessions".to_string(),
        action_timing: "AFTER".to_string(),
        definer: String::new(),
    });

    let options = RunOptions {
        ignore_tables: vec!["sessions".to_string(), "tmp_import".to_string()],
        ..RunOptions::default()
    };
    let reader = SnapshotCatalog::new(snap);
    let docs = pipeline::run(&reader, &options, "app").unwrap();

    assert_eq!(docs.table_list.table_names, vec!["users"]);
    assert!(docs.indexes.tables.iter().all(|t| t.indexes.is_empty()));
    assert!(docs.triggers.tables.iter().all(|t| t.triggers.is_empty()));
}

#[test]
fn test_index_rows_merge_by_table_and_name() {
    let mut snap = snapshot();
    for column_name in ["user_id", "created_at"] {
        snap.indexes.push(IndexRow {
            table_name: "users".to_string(),
            index_name: "idx_compound".to_string(),
            non_unique: 1,
            column_name: column_name.to_string(),
            comment: String::new(),
        });
    }

    let reader = SnapshotCatalog::new(snap);
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();

    let users = &docs.tables[0].table;
    assert_eq!(users.indexes.len(), 1);
    let index = &users.indexes[0];
    assert_eq!(index.name, "idx_compound");
    let members: Vec<&str> = index.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(members, vec!["user_id", "created_at"]);
}
