//! Schema Deriver.
//!
//! Closed shapes declare their column list once. Open-ended record sets
//! (free-form query results) derive columns from the union of observed
//! field names: priority fields first in fixed order, remainder sorted
//! lexicographically. The derived order is deterministic and independent
//! of record iteration order, so repeated renders of the same logical data
//! always produce identical tables.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::decode::Record;
use crate::render::Column;

/// Fixed width given to designated identifying fields in dynamic schemas;
/// every other dynamic column fills remaining space.
const KEY_FIELD_WIDTH: u32 = 150;

/// Column schema for one block of a variant.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Closed shape: the column list is a declared contract.
    Fixed(Vec<Column>),
    /// Open shape: columns derived from the records themselves.
    Dynamic {
        /// Interesting fields, hoisted to the front in this order when present.
        priority: &'static [&'static str],
        /// Identifying fields: fixed width instead of fill.
        key_fields: &'static [&'static str],
        /// Fields whose cells get a copy affordance.
        copy_fields: &'static [&'static str],
    },
}

impl Schema {
    pub fn columns(&self, records: &[Record]) -> Vec<Column> {
        match self {
            Schema::Fixed(columns) => columns.clone(),
            Schema::Dynamic {
                priority,
                key_fields,
                copy_fields,
            } => dynamic_columns(records, priority, key_fields, copy_fields),
        }
    }

    /// Render a field value as cell text under this schema.
    ///
    /// Dynamic schemas strip one level of wrapping quotes from string
    /// values (an artifact of encoding nested structured values as strings
    /// upstream in open record sets). Fixed schemas are declared contracts
    /// and show string values verbatim.
    pub fn cell_text(&self, value: &Value) -> String {
        match (self, value) {
            (Schema::Dynamic { .. }, Value::String(text)) => {
                strip_wrapping_quotes(text).to_string()
            }
            _ => stringify(value),
        }
    }
}

/// Derive the column list for an open record set.
fn dynamic_columns(
    records: &[Record],
    priority: &[&str],
    key_fields: &[&str],
    copy_fields: &[&str],
) -> Vec<Column> {
    let mut observed: BTreeSet<&str> = BTreeSet::new();
    for record in records {
        observed.extend(record.keys().map(String::as_str));
    }

    let mut order: Vec<&str> = Vec::with_capacity(observed.len());
    for &field in priority {
        if observed.remove(field) {
            order.push(field);
        }
    }
    // BTreeSet iterates in lexicographic order
    order.extend(observed);

    order
        .into_iter()
        .map(|field| {
            let mut column = Column::text(field);
            if key_fields.contains(&field) {
                column = column.width(KEY_FIELD_WIDTH);
            }
            if copy_fields.contains(&field) {
                column = column.copy();
            }
            column
        })
        .collect()
}

/// Render a field value as display text.
///
/// Strings pass through verbatim; null reads as empty; nested
/// arrays/objects render as compact JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_default(),
    }
}

/// Strip one pair of literal wrapping quote characters. Idempotent on
/// values that carry none.
pub fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode, DecodedPayload};

    fn records(json: &str) -> Vec<Record> {
        match decode(json) {
            DecodedPayload::Records(records) => records,
            other => panic!("fixture is not a record array: {:?}", other),
        }
    }

    #[test]
    fn test_dynamic_order_is_priority_then_lexicographic() {
        let rows = records(r#"[{"a": 1, "b": 2}, {"a": 1, "c": 3}]"#);
        let columns = dynamic_columns(&rows, &[], &[], &[]);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_dynamic_order_independent_of_record_order() {
        let forward = records(r#"[{"a": 1, "b": 2}, {"a": 1, "c": 3}]"#);
        let reversed = records(r#"[{"a": 1, "c": 3}, {"a": 1, "b": 2}]"#);
        let derive = |rows: &[Record]| {
            dynamic_columns(rows, &["c"], &[], &[])
                .into_iter()
                .map(|c| c.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(derive(&forward), derive(&reversed));
        assert_eq!(derive(&forward), ["c", "a", "b"]);
    }

    #[test]
    fn test_priority_fields_lead_and_absent_priority_is_skipped() {
        let rows = records(r#"[{"dn": "x", "cn": "y", "zeta": 1}]"#);
        let columns = dynamic_columns(&rows, &["dn", "sAMAccountName", "cn"], &["cn"], &["dn"]);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["dn", "cn", "zeta"]);
        assert_eq!(columns[1].width, Some(KEY_FIELD_WIDTH));
        assert!(columns[0].copy, "dn is a copy field");
        assert!(columns[0].width.is_none(), "non-key fields fill");
    }

    #[test]
    fn test_quote_stripping_is_idempotent() {
        assert_eq!(strip_wrapping_quotes("\"CN=Admin\""), "CN=Admin");
        assert_eq!(strip_wrapping_quotes("CN=Admin"), "CN=Admin");
        let once = strip_wrapping_quotes("plain");
        assert_eq!(strip_wrapping_quotes(once), once);
    }

    #[test]
    fn test_stringify_scalars_and_nested() {
        assert_eq!(stringify(&Value::Null), "");
        assert_eq!(stringify(&serde_json::json!(7)), "7");
        assert_eq!(stringify(&serde_json::json!(true)), "true");
        assert_eq!(stringify(&serde_json::json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn test_only_dynamic_schemas_strip_wrapping_quotes() {
        let quoted = serde_json::json!("\"bad password\"");
        let dynamic = Schema::Dynamic {
            priority: &[],
            key_fields: &[],
            copy_fields: &[],
        };
        assert_eq!(dynamic.cell_text(&quoted), "bad password");

        let fixed = Schema::Fixed(vec![Column::text("message")]);
        assert_eq!(
            fixed.cell_text(&quoted),
            "\"bad password\"",
            "declared columns show string values verbatim"
        );
    }
}
