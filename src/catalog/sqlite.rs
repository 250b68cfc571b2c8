//! SQLite-backed catalog reader.
//!
//! SQLite keeps its catalog in `sqlite_master` plus a family of pragmas;
//! this reader translates those into the same row shapes the MySQL
//! `information_schema` queries produce. Some MySQL-isms have no SQLite
//! counterpart (index comments, definers, display widths) and come back
//! empty.

use rusqlite::{params, Connection};

use super::reader::{CatalogReader, CatalogResult};
use super::rows::{ColumnRow, ForeignKeyRow, IndexRow, TriggerRow};

/// Catalog reader over a SQLite database file.
pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    /// Open a catalog reader over a database file.
    pub fn open(path: &str) -> CatalogResult<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Wrap an existing connection (used by tests with in-memory databases).
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Double-quote an identifier for interpolation into pragma calls.
    fn quote(ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }

    /// DDL text for a table, if any.
    fn table_sql(&self, table: &str) -> CatalogResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("select sql from sqlite_master where type = 'table' and name = ?1")?;
        let mut rows = stmt.query(params![table])?;
        match rows.next()? {
            Some(row) => Ok(row.get::<_, Option<String>>(0)?),
            None => Ok(None),
        }
    }

    /// Names of columns covered by a single-column unique index on `table`.
    fn unique_columns(&self, table: &str) -> CatalogResult<Vec<String>> {
        let mut unique = Vec::new();
        let sql = format!("pragma index_list({})", Self::quote(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let index_names: Vec<String> = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|(_, is_unique)| *is_unique != 0)
            .map(|(name, _)| name)
            .collect();

        for index_name in index_names {
            let columns = self.index_columns(&index_name)?;
            if let [column] = columns.as_slice() {
                unique.push(column.clone());
            }
        }
        Ok(unique)
    }

    /// Member column names of one index, in ordinal order.
    fn index_columns(&self, index_name: &str) -> CatalogResult<Vec<String>> {
        let sql = format!("pragma index_info({})", Self::quote(index_name));
        let mut stmt = self.conn.prepare(&sql)?;
        let columns = stmt
            .query_map([], |row| row.get::<_, Option<String>>(2))?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .flatten()
            .collect();
        Ok(columns)
    }

    /// First parenthesized number of a declared type (`varchar(255)` → `255`).
    fn declared_length(declared: &str) -> Option<String> {
        let open = declared.find('(')?;
        let close = declared[open..].find(')')? + open;
        let inner = &declared[open + 1..close];
        let first = inner.split(',').next()?.trim();
        if !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()) {
            Some(first.to_string())
        } else {
            None
        }
    }
}

impl CatalogReader for SqliteCatalog {
    fn list_tables(&self) -> CatalogResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "select name from sqlite_master \
             where type = 'table' and name not like 'sqlite_%'",
        )?;
        let tables = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tables)
    }

    fn table_columns(&self, table: &str) -> CatalogResult<Vec<ColumnRow>> {
        let ddl = self.table_sql(table)?.unwrap_or_default().to_uppercase();
        let has_autoincrement = ddl.contains("AUTOINCREMENT");
        let unique = self.unique_columns(table)?;

        let sql = format!("pragma table_info({})", Self::quote(table));
        let mut stmt = self.conn.prepare(&sql)?;
        let raw: Vec<(String, String, i64)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    row.get::<_, i64>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let columns = raw
            .into_iter()
            .map(|(name, declared, pk)| {
                let base = declared
                    .split('(')
                    .next()
                    .unwrap_or("")
                    .trim()
                    .to_lowercase();
                let is_rowid_alias = pk == 1 && base == "integer";
                let key = if pk > 0 {
                    "PRI".to_string()
                } else if unique.contains(&name) {
                    "UNI".to_string()
                } else {
                    String::new()
                };
                ColumnRow {
                    length: Self::declared_length(&declared),
                    data_type: if base.is_empty() { None } else { Some(base) },
                    extra: if is_rowid_alias && has_autoincrement {
                        "auto_increment".to_string()
                    } else {
                        String::new()
                    },
                    key,
                    declared_type: declared,
                    name,
                    ..ColumnRow::default()
                }
            })
            .collect();
        Ok(columns)
    }

    fn foreign_keys(&self) -> CatalogResult<Vec<ForeignKeyRow>> {
        let mut all = Vec::new();
        for table in self.list_tables()? {
            let sql = format!("pragma foreign_key_list({})", Self::quote(&table));
            let mut stmt = self.conn.prepare(&sql)?;
            let rows: Vec<ForeignKeyRow> = stmt
                .query_map([], |row| {
                    Ok(ForeignKeyRow {
                        table_name: table.clone(),
                        column_name: row.get::<_, String>(3)?,
                        referenced_table_name: Some(row.get::<_, String>(2)?),
                        referenced_column_name: row.get::<_, Option<String>>(4)?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            all.extend(rows);
        }
        Ok(all)
    }

    fn indexes(&self) -> CatalogResult<Vec<IndexRow>> {
        let mut all = Vec::new();
        for table in self.list_tables()? {
            let sql = format!("pragma index_list({})", Self::quote(&table));
            let mut stmt = self.conn.prepare(&sql)?;
            let indexes: Vec<(String, i64)> = stmt
                .query_map([], |row| {
                    Ok((row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
                })?
                .collect::<Result<Vec<_>, _>>()?;

            for (index_name, is_unique) in indexes {
                for column in self.index_columns(&index_name)? {
                    all.push(IndexRow {
                        table_name: table.clone(),
                        index_name: index_name.clone(),
                        non_unique: if is_unique != 0 { 0 } else { 1 },
                        column_name: column,
                        comment: String::new(),
                    });
                }
            }
        }
        Ok(all)
    }

    fn triggers(&self) -> CatalogResult<Vec<TriggerRow>> {
        let mut stmt = self
            .conn
            .prepare("select name, tbl_name, sql from sqlite_master where type = 'trigger'")?;
        let raw: Vec<(String, String, String)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let triggers = raw
            .into_iter()
            .map(|(name, table, sql)| {
                let upper = sql.to_uppercase();
                let action_timing = if upper.contains("INSTEAD OF") {
                    "INSTEAD OF"
                } else if upper.contains("BEFORE") {
                    "BEFORE"
                } else {
                    "AFTER"
                };
                let event_manipulation = ["INSERT", "UPDATE", "DELETE"]
                    .iter()
                    .find(|event| upper.contains(*event))
                    .copied()
                    .unwrap_or("");
                TriggerRow {
                    trigger_name: name,
                    event_manipulation: event_manipulation.to_string(),
                    event_object_table: table,
                    action_statement: sql,
                    action_timing: action_timing.to_string(),
                    definer: String::new(),
                }
            })
            .collect();
        Ok(triggers)
    }

    fn latest_migration(&self, table: &str) -> CatalogResult<Option<String>> {
        let exists: bool = self.conn.query_row(
            "select exists(select 1 from sqlite_master where type = 'table' and name = ?1)",
            params![table],
            |row| row.get(0),
        )?;
        if !exists {
            return Ok(None);
        }

        let sql = format!(
            "select * from {} order by 1 desc limit 1",
            Self::quote(table)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => {
                use rusqlite::types::Value;
                let value: Value = row.get(0)?;
                Ok(match value {
                    Value::Text(s) => Some(s),
                    Value::Integer(n) => Some(n.to_string()),
                    Value::Real(f) => Some(f.to_string()),
                    Value::Null | Value::Blob(_) => None,
                })
            }
            None => Ok(None),
        }
    }
}
