//! Shape Classifier.
//!
//! A single command may emit several JSON shapes depending on sub-mode
//! (aggregated vs. per-instance views, listing vs. permission objects).
//! Variants are recognized by probing for discriminator fields known to
//! exist in exactly one shape. Classification is total: every payload maps
//! to exactly one variant or to the generic fallback path, and it happens
//! once — downstream stages receive the chosen variant, never re-probe.

use serde_json::Value;
use thiserror::Error;

use crate::decode::{DecodedPayload, Record};

/// Shape or semantic mismatch discovered after decoding.
///
/// Never escapes the pipeline; every case maps to one of the two output
/// forms before the API boundary.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("decoded payload matches no known variant")]
    NoVariant,
    #[error("expected array field '{0}' is missing")]
    MissingArray(&'static str),
    #[error("payload shape is not tabular")]
    NotTabular,
}

/// Discriminator probe over a decoded payload.
///
/// Field probes inspect the top-level object, or the first record of a
/// non-empty array.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// All listed discriminator fields are present.
    HasFields(&'static [&'static str]),
    /// The field is present with one of the given string values.
    FieldOneOf(&'static str, &'static [&'static str]),
    /// Any non-empty array of records.
    AnyRecords,
    /// Any top-level object.
    AnyObject,
}

impl Probe {
    /// Number of discriminator fields this probe pins down.
    ///
    /// Candidates are tried most-specific first, so a payload satisfying
    /// both a two-field and a one-field discriminator set always classifies
    /// as the two-field variant. Declaration order breaks ties.
    pub fn specificity(&self) -> usize {
        match self {
            Probe::HasFields(fields) => fields.len(),
            Probe::FieldOneOf(_, _) => 1,
            Probe::AnyRecords | Probe::AnyObject => 0,
        }
    }

    pub fn matches(&self, payload: &DecodedPayload) -> bool {
        let subject: Option<&Record> = match payload {
            DecodedPayload::Records(records) => records.first(),
            DecodedPayload::Object(object) => Some(object),
            DecodedPayload::Raw(_) => None,
        };
        match self {
            Probe::HasFields(fields) => {
                subject.is_some_and(|record| fields.iter().all(|field| record.contains_key(*field)))
            }
            Probe::FieldOneOf(field, values) => subject
                .and_then(|record| record.get(*field))
                .and_then(Value::as_str)
                .is_some_and(|value| values.contains(&value)),
            Probe::AnyRecords => {
                matches!(payload, DecodedPayload::Records(records) if !records.is_empty())
            }
            Probe::AnyObject => matches!(payload, DecodedPayload::Object(_)),
        }
    }
}

/// Pick the matching candidate index, most-specific probe first.
///
/// Returns `None` when no probe matches; the caller takes the generic
/// fallback path. Deterministic for a given candidate list and payload.
pub fn classify(probes: &[Probe], payload: &DecodedPayload) -> Option<usize> {
    let mut order: Vec<usize> = (0..probes.len()).collect();
    order.sort_by_key(|&index| std::cmp::Reverse(probes[index].specificity()));
    order
        .into_iter()
        .find(|&index| probes[index].matches(payload))
}
