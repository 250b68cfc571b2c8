//! Column annotator.
//!
//! Derives the display fields of a column from its raw catalog row: the
//! rendered type string, the first meaningful length candidate, the badge
//! set and the resolved foreign key. Malformed or absent catalog fields
//! degrade to safe defaults; nothing in here fails a run.

use std::collections::HashSet;

use super::resolve::infer_parent;
use super::{Badge, Column, ColumnReference, ForeignKey};
use crate::catalog::ColumnRow;

/// Length values that mean "unbounded/unspecified" rather than a real limit.
/// These are MySQL text/blob storage-width artifacts (2^16-1, 2^24-1,
/// 2^32-1) and are suppressed from display.
pub const DEFAULT_SENTINEL_LENGTHS: &[&str] = &["65535", "16777215", "4294967295"];

/// Annotation settings.
#[derive(Debug, Clone)]
pub struct AnnotateOptions {
    /// Length values to treat as sentinels. Engines other than MySQL report
    /// different storage widths, so the set is configurable.
    pub sentinel_lengths: Vec<String>,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            sentinel_lengths: DEFAULT_SENTINEL_LENGTHS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AnnotateOptions {
    /// Compare by numeric value when both sides parse, else by string.
    fn is_sentinel(&self, value: &str) -> bool {
        self.sentinel_lengths.iter().any(|sentinel| {
            if let (Ok(a), Ok(b)) = (sentinel.parse::<u64>(), value.parse::<u64>()) {
                a == b
            } else {
                sentinel == value
            }
        })
    }
}

/// Annotate one catalog column row.
///
/// `explicit` is the table's declared constraint for this column, if any.
/// Declared constraints always win over the naming heuristic; a declared
/// constraint pointing at a non-admitted table resolves to nothing (the
/// reference is out of documentation scope) and also suppresses the
/// heuristic.
pub fn annotate(
    row: ColumnRow,
    explicit: Option<&ForeignKey>,
    admitted: &HashSet<String>,
    options: &AnnotateOptions,
) -> Column {
    let display_type = render_type(&row);
    let display_length = pick_length(&row, options);

    let resolved_foreign_key = match explicit {
        Some(fk) if admitted.contains(&fk.referenced_table) => Some(ColumnReference {
            table: fk.referenced_table.clone(),
            column: fk.referenced_column.clone(),
        }),
        Some(_) => None,
        None => infer_parent(&row.name, admitted),
    };

    let mut badges = Vec::new();
    let key = row.key.to_lowercase();
    if key.contains("pri") {
        badges.push(Badge::Pk);
    }
    if key.contains("uni") {
        badges.push(Badge::Ui);
    }
    if row.extra.contains("auto_increment") {
        badges.push(Badge::Ai);
    }
    if resolved_foreign_key.is_some() {
        badges.push(Badge::Fk);
    }

    Column {
        raw: row,
        display_type,
        display_length,
        badges,
        resolved_foreign_key,
    }
}

/// Render the display type; enum types carry their option list in catalog
/// order, everything else passes through unchanged.
fn render_type(row: &ColumnRow) -> String {
    let base = row.base_type();
    if base == "enum" {
        let options = row.options.as_deref().unwrap_or_default();
        let quoted: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
        format!("enum({})", quoted.join(", "))
    } else {
        base.to_string()
    }
}

/// First length candidate, in priority order, whose value is not a sentinel.
fn pick_length(row: &ColumnRow, options: &AnnotateOptions) -> Option<String> {
    [
        row.length.as_deref(),
        row.character_maximum_length.as_deref(),
        row.display.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|value| !options.is_sentinel(value))
    .map(|value| value.to_string())
}
