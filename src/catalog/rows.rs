//! Typed catalog row records.
//!
//! Catalog metadata arrives loosely typed (numbers or strings depending on
//! the driver), so every row is validated and normalized here at ingestion.
//! Downstream components never re-check field presence: absent fields are
//! `None` or empty strings by the time they leave this module.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize an optional value that may arrive as a JSON number or string,
/// normalizing to a string.
fn opt_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Num(i64),
        Text(String),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Num(n) => n.to_string(),
        Scalar::Text(s) => s,
    }))
}

/// One column definition as reported by the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnRow {
    /// Column name.
    pub name: String,

    /// Full declared type string (e.g. `varchar(255)`).
    #[serde(rename = "type", default)]
    pub declared_type: String,

    /// Base type category (e.g. `varchar`, `enum`). Falls back to the
    /// declared type string when the catalog does not report it separately.
    #[serde(default)]
    pub data_type: Option<String>,

    /// Driver-reported length.
    #[serde(default, deserialize_with = "opt_scalar")]
    pub length: Option<String>,

    /// `information_schema` character maximum length.
    #[serde(default, deserialize_with = "opt_scalar")]
    pub character_maximum_length: Option<String>,

    /// Display width (numeric types).
    #[serde(default, deserialize_with = "opt_scalar")]
    pub display: Option<String>,

    /// Key role as reported by the catalog (`PRI`, `UNI`, `MUL`, ...).
    #[serde(default)]
    pub key: String,

    /// Extra attributes (`auto_increment`, ...).
    #[serde(default)]
    pub extra: String,

    /// Enum option list, in catalog order, when the base type is an enum.
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl ColumnRow {
    /// Base type category, defaulting to the declared type string.
    pub fn base_type(&self) -> &str {
        self.data_type.as_deref().unwrap_or(&self.declared_type)
    }
}

/// One foreign-key constraint row from the catalog.
///
/// Referenced fields are optional: constraint rows without a resolvable
/// target exist in some catalogs and are dropped by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKeyRow {
    pub table_name: String,
    pub column_name: String,
    #[serde(default)]
    pub referenced_table_name: Option<String>,
    #[serde(default)]
    pub referenced_column_name: Option<String>,
}

/// One index member row from the catalog. Rows sharing `(table_name,
/// index_name)` describe one multi-column index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexRow {
    pub table_name: String,
    pub index_name: String,
    /// 0 when the index is unique (MySQL convention).
    #[serde(default)]
    pub non_unique: i64,
    pub column_name: String,
    #[serde(default)]
    pub comment: String,
}

/// One trigger definition row from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerRow {
    pub trigger_name: String,
    /// Event type (`INSERT`, `UPDATE`, `DELETE`).
    #[serde(default)]
    pub event_manipulation: String,
    /// Owning table.
    pub event_object_table: String,
    /// Trigger body.
    #[serde(default)]
    pub action_statement: String,
    /// `BEFORE`, `AFTER` or `INSTEAD OF`.
    #[serde(default)]
    pub action_timing: String,
    #[serde(default)]
    pub definer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_row_scalar_fields_accept_numbers_and_strings() {
        let row: ColumnRow = serde_json::from_str(
            r#"{"name": "title", "type": "varchar(255)", "length": 255, "display": "10"}"#,
        )
        .unwrap();
        assert_eq!(row.length.as_deref(), Some("255"));
        assert_eq!(row.display.as_deref(), Some("10"));
        assert!(row.character_maximum_length.is_none());
    }

    #[test]
    fn test_column_row_base_type_falls_back_to_declared() {
        let row: ColumnRow =
            serde_json::from_str(r#"{"name": "id", "type": "int(11)"}"#).unwrap();
        assert_eq!(row.base_type(), "int(11)");

        let row: ColumnRow =
            serde_json::from_str(r#"{"name": "id", "type": "int(11)", "data_type": "int"}"#)
                .unwrap();
        assert_eq!(row.base_type(), "int");
    }

    #[test]
    fn test_fk_row_allows_null_references() {
        let row: ForeignKeyRow =
            serde_json::from_str(r#"{"table_name": "posts", "column_name": "user_id"}"#).unwrap();
        assert!(row.referenced_table_name.is_none());
    }
}
