//! Relationship resolver.
//!
//! Merges explicit foreign-key constraint rows, index rows and trigger rows
//! into the admitted tables, and hosts the naming-convention heuristic used
//! by the annotator for columns with no declared constraint.

use std::collections::{HashMap, HashSet};

use crate::catalog::{ForeignKeyRow, IndexRow, TriggerRow};
use crate::inflect;

use super::{ColumnReference, ForeignKey, Index, IndexColumn, Table, Trigger};

/// Build one `Table` shell per admitted name and attach constraints, indexes
/// and triggers. Rows referring to non-admitted tables are silently dropped:
/// they describe out-of-scope dependencies, not errors.
pub fn resolve(
    admitted: &[String],
    fk_rows: Vec<ForeignKeyRow>,
    index_rows: Vec<IndexRow>,
    trigger_rows: Vec<TriggerRow>,
) -> Vec<Table> {
    let mut tables: Vec<Table> = admitted.iter().map(Table::new).collect();
    let slot: HashMap<&str, usize> = admitted
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // Explicit constraints only; rows missing either referenced field are
    // unusable and dropped up front.
    for row in fk_rows {
        let (referenced_table, referenced_column) =
            match (row.referenced_table_name, row.referenced_column_name) {
                (Some(t), Some(c)) => (t, c),
                _ => continue,
            };
        if let Some(&i) = slot.get(row.table_name.as_str()) {
            tables[i].foreign_keys.insert(
                row.column_name.clone(),
                ForeignKey {
                    table: row.table_name,
                    column: row.column_name,
                    referenced_table,
                    referenced_column,
                },
            );
        }
    }

    // Rows sharing (table, index name) merge into one index, columns in
    // row order.
    for row in index_rows {
        let Some(&i) = slot.get(row.table_name.as_str()) else {
            continue;
        };
        let table = &mut tables[i];
        let column = IndexColumn {
            name: row.column_name,
            unique: row.non_unique == 0,
            comment: row.comment,
        };
        match table.indexes.iter_mut().find(|ix| ix.name == row.index_name) {
            Some(index) => index.columns.push(column),
            None => table.indexes.push(Index {
                name: row.index_name,
                columns: vec![column],
            }),
        }
    }

    for row in trigger_rows {
        if let Some(&i) = slot.get(row.event_object_table.as_str()) {
            tables[i].triggers.push(Trigger {
                name: row.trigger_name,
                event: row.event_manipulation,
                table: row.event_object_table,
                statement: row.action_statement,
                timing: row.action_timing,
                definer: row.definer,
            });
        }
    }

    tables
}

/// Infer a probable parent for a column with no explicit foreign key.
///
/// A name ending in `_id` yields a candidate parent by stripping the suffix;
/// the singular form of the candidate is tried first, then the plural, each
/// against the admitted set. Singular wins when both forms name admitted
/// tables. The referenced column is always `id`.
pub fn infer_parent(column: &str, admitted: &HashSet<String>) -> Option<ColumnReference> {
    let prefix = column.strip_suffix("_id")?;
    if prefix.is_empty() {
        return None;
    }

    for candidate in [inflect::singularize(prefix), inflect::pluralize(prefix)] {
        if admitted.contains(&candidate) {
            return Some(ColumnReference {
                table: candidate,
                column: "id".to_string(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admitted(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_parent_plural_table() {
        let set = admitted(&["users", "posts"]);
        let parent = infer_parent("user_id", &set).unwrap();
        assert_eq!(parent.table, "users");
        assert_eq!(parent.column, "id");
    }

    #[test]
    fn test_infer_parent_singular_table() {
        let set = admitted(&["customer"]);
        let parent = infer_parent("customer_id", &set).unwrap();
        assert_eq!(parent.table, "customer");
    }

    #[test]
    fn test_infer_parent_irregular_plural() {
        let set = admitted(&["categories", "children"]);
        assert_eq!(infer_parent("category_id", &set).unwrap().table, "categories");
        assert_eq!(infer_parent("child_id", &set).unwrap().table, "children");
    }

    #[test]
    fn test_infer_parent_singular_wins_ties() {
        // Both forms admitted: the singular form is the defined winner.
        let set = admitted(&["account", "accounts"]);
        assert_eq!(infer_parent("account_id", &set).unwrap().table, "account");
    }

    #[test]
    fn test_infer_parent_requires_id_suffix() {
        let set = admitted(&["users"]);
        assert!(infer_parent("username", &set).is_none());
        assert!(infer_parent("_id", &set).is_none());
        assert!(infer_parent("id", &set).is_none());
    }

    #[test]
    fn test_infer_parent_unknown_table() {
        let set = admitted(&["users"]);
        assert!(infer_parent("invoice_id", &set).is_none());
    }
}
