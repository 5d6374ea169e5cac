//! Table Composer.
//!
//! Extracts each block's rows from the classified payload, derives the
//! block's columns, styles each row, and builds the computed title. Blocks
//! are emitted in declared order — summary/info blocks before detail
//! blocks. Cell text always goes through the block schema's `cell_text`.

use serde_json::Value;

use crate::classify::ShapeError;
use crate::decode::{DecodedPayload, Record};
use crate::render::{Cell, Column, Row, TableBlock};
use crate::schema::{stringify, Schema};
use crate::style::{style_for, PayloadStats, StyleRule};

/// Where one block's rows come from.
#[derive(Debug, Clone, Copy)]
pub enum RowSource {
    /// The payload's own records: the decoded array, or a single top-level
    /// object treated as one record.
    Root,
    /// Records under an array-valued field of a top-level object.
    NestedArray(&'static str),
    /// `(label, field)` projection of a top-level object into field/value
    /// rows. Absent, empty, and zero values are skipped — an info block
    /// only shows what the tool actually reported.
    KeyValue(&'static [(&'static str, &'static str)]),
}

/// Context handed to per-block title functions.
pub struct TitleCtx<'a> {
    /// The block's extracted (and prepared) rows.
    pub rows: &'a [Record],
    /// The top-level object, when the payload had one.
    pub object: Option<&'a Record>,
}

impl<'a> TitleCtx<'a> {
    /// String field of the top-level object.
    pub fn object_str(&self, field: &str) -> Option<&'a str> {
        self.object?.get(field).and_then(Value::as_str)
    }

    /// Numeric field of the top-level object.
    pub fn object_u64(&self, field: &str) -> Option<u64> {
        self.object?.get(field).and_then(Value::as_u64)
    }

    /// Count of rows satisfying a predicate; the usual title ingredient.
    pub fn count(&self, predicate: impl Fn(&Record) -> bool) -> usize {
        self.rows.iter().filter(|&row| predicate(row)).count()
    }
}

/// Computes one block's title from its rows and the payload object.
pub type TitleFn = fn(&TitleCtx) -> String;

/// Extract a block's records from the decoded payload.
pub fn extract_rows(source: RowSource, payload: &DecodedPayload) -> Result<Vec<Record>, ShapeError> {
    match source {
        RowSource::Root => match payload {
            DecodedPayload::Records(records) => Ok(records.clone()),
            DecodedPayload::Object(object) => Ok(vec![object.clone()]),
            DecodedPayload::Raw(_) => Err(ShapeError::NotTabular),
        },
        RowSource::NestedArray(field) => {
            let DecodedPayload::Object(object) = payload else {
                return Err(ShapeError::NotTabular);
            };
            let Some(Value::Array(items)) = object.get(field) else {
                return Err(ShapeError::MissingArray(field));
            };
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(record) => records.push(record.clone()),
                    _ => return Err(ShapeError::MissingArray(field)),
                }
            }
            Ok(records)
        }
        RowSource::KeyValue(pairs) => {
            let DecodedPayload::Object(object) = payload else {
                return Err(ShapeError::NotTabular);
            };
            let mut records = Vec::new();
            for &(label, field) in pairs {
                let Some(value) = object.get(field) else {
                    continue;
                };
                // integer and float zero both count as "not reported"
                let is_zero = value.as_f64().is_some_and(|n| n == 0.0);
                if value.is_null() || is_zero || stringify(value).is_empty() {
                    continue;
                }
                let mut record = Record::new();
                record.insert("field".to_string(), Value::String(label.to_string()));
                record.insert("value".to_string(), value.clone());
                records.push(record);
            }
            Ok(records)
        }
    }
}

/// Build one table block from prepared records. Cell text goes through the
/// block's schema, so only dynamic schemas strip wrapping quotes.
pub fn build_block(
    schema: &Schema,
    records: &[Record],
    rules: &[StyleRule],
    stats: &PayloadStats,
    title: String,
) -> TableBlock {
    let columns = schema.columns(records);
    let rows = records
        .iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| {
                    let text = record
                        .get(&column.key)
                        .map(|value| schema.cell_text(value))
                        .unwrap_or_default();
                    let mut cell = Cell::new(text);
                    cell.copy_icon = column.copy;
                    (column.key.clone(), cell)
                })
                .collect();
            Row {
                cells,
                style: style_for(record, rules, stats),
            }
        })
        .collect();
    TableBlock {
        headers: columns,
        rows,
        title,
    }
}

/// Join an array-valued field into display text; scalars pass through.
pub fn join_array(record: &Record, field: &str, separator: &str) -> String {
    match record.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(separator),
        Some(other) => stringify(other),
        None => String::new(),
    }
}

/// Standard key/value info-block columns: a fixed-width field label and a
/// fill-width copyable value.
pub fn key_value_columns() -> Vec<Column> {
    vec![
        Column::text("field").width(200),
        Column::text("value").copy(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn test_key_value_skips_absent_empty_and_zero() {
        let payload = decode(
            r#"{"domain": "corp.local", "forest": "", "force_logoff": 0,
                "lockout_duration": 0.0, "dc_site": null}"#,
        );
        let rows = extract_rows(
            RowSource::KeyValue(&[
                ("Domain", "domain"),
                ("Forest", "forest"),
                ("Force Logoff", "force_logoff"),
                ("Lockout Duration", "lockout_duration"),
                ("DC Site", "dc_site"),
                ("Client Site", "client_site"),
            ]),
            &payload,
        )
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["field"], "Domain");
        assert_eq!(rows[0]["value"], "corp.local");
    }

    #[test]
    fn test_nested_array_missing_is_a_shape_error() {
        let payload = decode(r#"{"query": "(objectClass=user)"}"#);
        let result = extract_rows(RowSource::NestedArray("entries"), &payload);
        assert!(matches!(result, Err(ShapeError::MissingArray("entries"))));
    }

    #[test]
    fn test_root_treats_object_as_single_record() {
        let payload = decode(r#"{"pid": 4}"#);
        let rows = extract_rows(RowSource::Root, &payload).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_build_block_fills_missing_fields_with_empty_cells() {
        let payload = decode(r#"[{"a": 1}, {"b": 2}]"#);
        let records = extract_rows(RowSource::Root, &payload).unwrap();
        let schema = Schema::Fixed(vec![Column::text("a"), Column::text("b")]);
        let stats = PayloadStats::compute(&records);
        let block = build_block(&schema, &records, &[], &stats, "t".to_string());
        assert_eq!(block.rows[0].cells["a"].plaintext, "1");
        assert_eq!(block.rows[0].cells["b"].plaintext, "");
        assert_eq!(block.rows[1].cells["b"].plaintext, "2");
    }
}
