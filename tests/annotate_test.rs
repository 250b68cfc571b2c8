//! Column annotation: display types, lengths and badges, exercised through
//! the public pipeline with snapshot fixtures.

use std::collections::HashMap;

use schemadoc::catalog::{CatalogSnapshot, ColumnRow, ForeignKeyRow, SnapshotCatalog};
use schemadoc::model::{AnnotateOptions, Badge};
use schemadoc::{pipeline, RunOptions};

fn run_single_table(columns: Vec<ColumnRow>, fks: Vec<ForeignKeyRow>) -> schemadoc::emit::DocumentSet {
    let mut map = HashMap::new();
    map.insert("articles".to_string(), columns);
    map.insert(
        "users".to_string(),
        vec![ColumnRow {
            name: "id".to_string(),
            declared_type: "int".to_string(),
            ..ColumnRow::default()
        }],
    );
    let snapshot = CatalogSnapshot {
        tables: vec!["articles".to_string(), "users".to_string()],
        columns: map,
        foreign_keys: fks,
        ..CatalogSnapshot::default()
    };
    let reader = SnapshotCatalog::new(snapshot);
    pipeline::run(&reader, &RunOptions::default(), "app").unwrap()
}

fn articles(docs: &schemadoc::emit::DocumentSet) -> &schemadoc::model::Table {
    &docs.tables[0].table
}

#[test]
fn test_enum_type_renders_with_options() {
    let docs = run_single_table(
        vec![ColumnRow {
            name: "state".to_string(),
            declared_type: "enum".to_string(),
            data_type: Some("enum".to_string()),
            options: Some(vec!["a".to_string(), "b".to_string(), "c".to_string()]),
            ..ColumnRow::default()
        }],
        vec![],
    );
    assert_eq!(
        articles(&docs).columns[0].display_type,
        "enum('a', 'b', 'c')"
    );
}

#[test]
fn test_sentinel_lengths_suppressed_in_priority_order() {
    let docs = run_single_table(
        vec![
            ColumnRow {
                name: "body".to_string(),
                declared_type: "text".to_string(),
                length: Some("65535".to_string()),
                character_maximum_length: Some("65535".to_string()),
                ..ColumnRow::default()
            },
            ColumnRow {
                name: "summary".to_string(),
                declared_type: "varchar".to_string(),
                length: Some("16777215".to_string()),
                character_maximum_length: Some("180".to_string()),
                ..ColumnRow::default()
            },
            ColumnRow {
                name: "views".to_string(),
                declared_type: "int".to_string(),
                display: Some("11".to_string()),
                ..ColumnRow::default()
            },
        ],
        vec![],
    );
    let table = articles(&docs);
    assert!(table.columns[0].display_length.is_none());
    assert_eq!(table.columns[1].display_length.as_deref(), Some("180"));
    assert_eq!(table.columns[2].display_length.as_deref(), Some("11"));
}

#[test]
fn test_badge_set_for_pri_auto_increment_with_fk() {
    let docs = run_single_table(
        vec![ColumnRow {
            name: "user_id".to_string(),
            declared_type: "int".to_string(),
            key: "PRI".to_string(),
            extra: "auto_increment".to_string(),
            ..ColumnRow::default()
        }],
        vec![ForeignKeyRow {
            table_name: "articles".to_string(),
            column_name: "user_id".to_string(),
            referenced_table_name: Some("users".to_string()),
            referenced_column_name: Some("id".to_string()),
        }],
    );
    // Exactly {PK, AI, FK}, no UI.
    assert_eq!(
        articles(&docs).columns[0].badges,
        vec![Badge::Pk, Badge::Ai, Badge::Fk]
    );
}

#[test]
fn test_key_match_is_case_insensitive_substring() {
    let docs = run_single_table(
        vec![ColumnRow {
            name: "email".to_string(),
            declared_type: "varchar".to_string(),
            key: "uni".to_string(),
            ..ColumnRow::default()
        }],
        vec![],
    );
    assert_eq!(articles(&docs).columns[0].badges, vec![Badge::Ui]);
}

#[test]
fn test_custom_sentinels_via_options() {
    let mut options = RunOptions::default();
    options.annotate = AnnotateOptions {
        sentinel_lengths: vec!["255".to_string()],
    };

    let mut map = HashMap::new();
    map.insert(
        "articles".to_string(),
        vec![ColumnRow {
            name: "title".to_string(),
            declared_type: "varchar".to_string(),
            length: Some("255".to_string()),
            ..ColumnRow::default()
        }],
    );
    let snapshot = CatalogSnapshot {
        tables: vec!["articles".to_string()],
        columns: map,
        ..CatalogSnapshot::default()
    };
    let reader = SnapshotCatalog::new(snapshot);
    let docs = pipeline::run(&reader, &options, "app").unwrap();
    assert!(docs.tables[0].table.columns[0].display_length.is_none());
}
