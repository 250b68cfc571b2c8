//! Table registry: the admitted working set.
//!
//! Starts from the full catalog table list, removes the ignore list (exact,
//! case-sensitive) and anything matching the ignore regex. An empty result
//! is fatal: there is nothing to document.

use regex::Regex;

use crate::error::{DocError, DocResult};

/// Filter the catalog table list down to the admitted set, preserving
/// catalog order. Nothing removed here is ever re-added.
pub fn admit(
    schema: &str,
    all_tables: &[String],
    ignore: &[String],
    ignore_regex: Option<&Regex>,
) -> DocResult<Vec<String>> {
    let admitted: Vec<String> = all_tables
        .iter()
        .filter(|name| !ignore.iter().any(|ignored| ignored == *name))
        .filter(|name| ignore_regex.map_or(true, |re| !re.is_match(name)))
        .cloned()
        .collect();

    if admitted.is_empty() {
        return Err(DocError::EmptySchema {
            schema: schema.to_string(),
        });
    }

    log::debug!(
        "admitted {} of {} tables in {}",
        admitted.len(),
        all_tables.len(),
        schema
    );
    Ok(admitted)
}
