//! End-to-end pipeline scenarios over snapshot catalogs.

use std::collections::HashMap;

use schemadoc::catalog::{CatalogSnapshot, ColumnRow, ForeignKeyRow, SnapshotCatalog};
use schemadoc::model::Badge;
use schemadoc::{pipeline, RunOptions};

fn column(name: &str, data_type: &str) -> ColumnRow {
    ColumnRow {
        name: name.to_string(),
        declared_type: data_type.to_string(),
        data_type: Some(data_type.to_string()),
        ..ColumnRow::default()
    }
}

fn users_posts_snapshot() -> CatalogSnapshot {
    let mut columns = HashMap::new();
    columns.insert(
        "users".to_string(),
        vec![column("id", "int"), column("name", "varchar")],
    );
    columns.insert(
        "posts".to_string(),
        vec![
            column("id", "int"),
            column("user_id", "int"),
            column("title", "varchar"),
        ],
    );
    CatalogSnapshot {
        tables: vec!["users".to_string(), "posts".to_string()],
        columns,
        ..CatalogSnapshot::default()
    }
}

#[test]
fn test_users_posts_inference_scenario() {
    let reader = SnapshotCatalog::new(users_posts_snapshot());
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();

    // Table list page shows exactly the admitted tables, in catalog order.
    assert_eq!(docs.table_list.table_names, vec!["users", "posts"]);

    // posts.user_id has no explicit constraint: the naming heuristic infers
    // users.id, and FK is the only badge.
    let posts = &docs.tables[1].table;
    assert_eq!(posts.name, "posts");
    let user_id = posts
        .columns
        .iter()
        .find(|c| c.name() == "user_id")
        .unwrap();
    assert_eq!(user_id.badges, vec![Badge::Fk]);
    let resolved = user_id.resolved_foreign_key.as_ref().unwrap();
    assert_eq!(resolved.table, "users");
    assert_eq!(resolved.column, "id");

    // The explicit FK map stays empty: inferred references never land there.
    assert!(posts.foreign_keys.is_empty());

    // users.name infers nothing.
    let users = &docs.tables[0].table;
    let name = users.columns.iter().find(|c| c.name() == "name").unwrap();
    assert!(name.resolved_foreign_key.is_none());
    assert!(name.badges.is_empty());
}

#[test]
fn test_explicit_constraint_overrides_heuristic() {
    let mut snapshot = users_posts_snapshot();
    snapshot.tables.push("accounts".to_string());
    snapshot
        .columns
        .insert("accounts".to_string(), vec![column("id", "int")]);
    snapshot.foreign_keys.push(ForeignKeyRow {
        table_name: "posts".to_string(),
        column_name: "user_id".to_string(),
        referenced_table_name: Some("accounts".to_string()),
        referenced_column_name: Some("id".to_string()),
    });

    let reader = SnapshotCatalog::new(snapshot);
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();

    let posts = &docs.tables[1].table;
    let user_id = posts
        .columns
        .iter()
        .find(|c| c.name() == "user_id")
        .unwrap();
    // The declared constraint wins even though the heuristic would have
    // matched users.
    let resolved = user_id.resolved_foreign_key.as_ref().unwrap();
    assert_eq!(resolved.table, "accounts");
    assert!(posts.foreign_keys.contains_key("user_id"));
}

#[test]
fn test_fk_rows_missing_references_are_dropped() {
    let mut snapshot = users_posts_snapshot();
    snapshot.foreign_keys.push(ForeignKeyRow {
        table_name: "posts".to_string(),
        column_name: "user_id".to_string(),
        referenced_table_name: None,
        referenced_column_name: None,
    });

    let reader = SnapshotCatalog::new(snapshot);
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();

    // The unusable row never reaches the FK map; the heuristic still fires.
    let posts = &docs.tables[1].table;
    assert!(posts.foreign_keys.is_empty());
    let user_id = posts
        .columns
        .iter()
        .find(|c| c.name() == "user_id")
        .unwrap();
    assert_eq!(user_id.resolved_foreign_key.as_ref().unwrap().table, "users");
}

#[test]
fn test_triggers_keep_catalog_order() {
    use schemadoc::catalog::TriggerRow;

    let mut snapshot = users_posts_snapshot();
    for (name, timing, event) in [
        ("trg_posts_audit", "AFTER", "INSERT"),
        ("trg_posts_guard", "BEFORE", "UPDATE"),
        ("trg_posts_purge", "AFTER", "DELETE"),
    ] {
        snapshot.triggers.push(TriggerRow {
            trigger_name: name.to_string(),
            event_manipulation: event.to_string(),
            event_object_table: "posts".to_string(),
            action_statement: "update posts set title = title".to_string(),
            action_timing: timing.to_string(),
            definer: String::new(),
        });
    }

    let reader = SnapshotCatalog::new(snapshot);
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();

    // Triggers come back in the order the catalog reported them, on the
    // table page and the global trigger page alike.
    let posts = &docs.tables[1].table;
    let names: Vec<&str> = posts.triggers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["trg_posts_audit", "trg_posts_guard", "trg_posts_purge"]
    );

    let global = docs
        .triggers
        .tables
        .iter()
        .find(|t| t.table == "posts")
        .unwrap();
    let global_names: Vec<&str> = global.triggers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(global_names, names);
}

#[test]
fn test_latest_migration_reaches_summary() {
    let mut snapshot = users_posts_snapshot();
    snapshot.latest_migration = Some("012_add_titles".to_string());

    let reader = SnapshotCatalog::new(snapshot);
    let docs = pipeline::run(&reader, &RunOptions::default(), "app").unwrap();
    assert_eq!(docs.summary.schema, "app");
    assert_eq!(
        docs.summary.latest_migration.as_deref(),
        Some("012_add_titles")
    );
}
