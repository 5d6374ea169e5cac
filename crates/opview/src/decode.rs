//! Structured Decoder.
//!
//! Attempts to decode the assembled buffer as JSON. Decode failure is never
//! escalated: the raw buffer flows through as plaintext, which is the single
//! fallback that keeps every command renderable no matter what the tool
//! emitted (truncated output, diagnostic text, a bare scalar).

use serde_json::Value;
use tracing::debug;

/// One decoded record: field name → scalar or nested value.
pub type Record = serde_json::Map<String, Value>;

/// The structured value obtained from the assembled buffer.
///
/// Transient: exists only for the duration of one render call.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedPayload {
    /// Array of records. May be empty, which callers must distinguish
    /// from a non-empty result.
    Records(Vec<Record>),
    /// A single top-level object.
    Object(Record),
    /// Not decodable as tabular JSON; carries the original buffer.
    Raw(String),
}

/// Decode the assembled buffer. Never fails; malformed input becomes `Raw`.
pub fn decode(buffer: &str) -> DecodedPayload {
    match serde_json::from_str::<Value>(buffer) {
        Ok(Value::Array(items)) => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(record) => records.push(record),
                    _ => {
                        debug!("array payload contains non-object items, passing through raw");
                        return DecodedPayload::Raw(buffer.to_string());
                    }
                }
            }
            DecodedPayload::Records(records)
        }
        Ok(Value::Object(object)) => DecodedPayload::Object(object),
        Ok(_) => {
            debug!("payload decoded to a bare scalar, passing through raw");
            DecodedPayload::Raw(buffer.to_string())
        }
        Err(err) => {
            debug!("payload is not valid JSON ({}), passing through raw", err);
            DecodedPayload::Raw(buffer.to_string())
        }
    }
}

/// Field accessor: string value, if present and a string.
pub fn str_field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// Field accessor: boolean value, absent or non-boolean reads as false.
pub fn bool_field(record: &Record, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Field accessor: unsigned integer value, if present and numeric.
pub fn u64_field(record: &Record, key: &str) -> Option<u64> {
    record.get(key).and_then(Value::as_u64)
}
