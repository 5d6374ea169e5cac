//! Row Stylist.
//!
//! Per-variant rule tables mapping a record to a highlight tint for
//! risk/severity signaling. Rules are pure and read only the current record,
//! except for aggregate predicates which read a `PayloadStats` computed once
//! before the row loop. The highest-precedence matching rule wins regardless
//! of declaration order ("disabled" dominates "risk" for operator triage);
//! declaration order breaks ties. No match yields the neutral style.

use std::collections::BTreeMap;

use crate::decode::Record;
use crate::render::RowStyle;
use crate::schema::stringify;

/// Background tints shared across command rule tables.
pub mod tint {
    /// System-integrity / highest-risk signal.
    pub const RISK_HIGH: &str = "rgba(255,0,0,0.15)";
    /// Strong risk on detail rows (DACL "dangerous", unconstrained delegation).
    pub const RISK_STRONG: &str = "rgba(255,0,0,0.2)";
    /// Faint risk (process/thread handles).
    pub const RISK_FAINT: &str = "rgba(255,0,0,0.1)";
    /// Elevated but not critical.
    pub const ELEVATED: &str = "rgba(255,165,0,0.15)";
    /// Notable warning (AS-REP roastable, expiring credentials).
    pub const WARN: &str = "rgba(255,165,0,0.2)";
    /// Faint warning (registry-key handles).
    pub const WARN_FAINT: &str = "rgba(255,165,0,0.1)";
    /// Confirmed-good signal (valid credentials).
    pub const SUCCESS: &str = "rgba(0,200,0,0.2)";
    /// Softer positive signal.
    pub const SUCCESS_SOFT: &str = "rgba(0,200,0,0.15)";
    /// Informational (file handles, directories).
    pub const INFO: &str = "rgba(100,149,237,0.1)";
    /// De-emphasized (disabled, expired, low integrity).
    pub const MUTED: &str = "rgba(128,128,128,0.15)";
}

/// Pure predicate over one record.
#[derive(Debug, Clone, Copy)]
pub enum StylePredicate {
    /// Field stringifies exactly to the given value.
    FieldEquals(&'static str, &'static str),
    /// Field's string value is one of the given values.
    FieldIn(&'static str, &'static [&'static str]),
    /// Field's stringified value contains the given substring.
    FieldContains(&'static str, &'static str),
    /// Field is boolean true.
    FieldTruthy(&'static str),
    /// Field is present with a non-empty, non-null value.
    FieldPresent(&'static str),
    /// Field is numeric and at least the threshold.
    FieldAtLeast(&'static str, f64),
    /// Any sub-predicate matches.
    AnyOf(&'static [StylePredicate]),
    /// All sub-predicates match.
    AllOf(&'static [StylePredicate]),
    /// Aggregate: the field's value differs from the payload-wide
    /// majority value for that field.
    NotMajority(&'static str),
}

impl StylePredicate {
    pub fn matches(&self, record: &Record, stats: &PayloadStats) -> bool {
        match self {
            StylePredicate::FieldEquals(field, expected) => {
                record.get(*field).map(|v| stringify(v)) == Some((*expected).to_string())
            }
            StylePredicate::FieldIn(field, values) => record
                .get(*field)
                .map(|v| stringify(v))
                .is_some_and(|v| values.contains(&v.as_str())),
            StylePredicate::FieldContains(field, needle) => record
                .get(*field)
                .map(|v| stringify(v))
                .is_some_and(|v| v.contains(needle)),
            StylePredicate::FieldTruthy(field) => {
                record.get(*field).and_then(serde_json::Value::as_bool) == Some(true)
            }
            StylePredicate::FieldPresent(field) => record
                .get(*field)
                .is_some_and(|v| !v.is_null() && !stringify(v).is_empty()),
            StylePredicate::FieldAtLeast(field, threshold) => record
                .get(*field)
                .and_then(serde_json::Value::as_f64)
                .is_some_and(|v| v >= *threshold),
            StylePredicate::AnyOf(predicates) => {
                predicates.iter().any(|p| p.matches(record, stats))
            }
            StylePredicate::AllOf(predicates) => {
                predicates.iter().all(|p| p.matches(record, stats))
            }
            StylePredicate::NotMajority(field) => {
                let Some(majority) = stats.majority(field) else {
                    return false;
                };
                record
                    .get(*field)
                    .map(|v| stringify(v))
                    .is_some_and(|v| v != majority)
            }
        }
    }
}

/// One `(predicate, tint)` rule. Higher `precedence` wins over any
/// lower-precedence match regardless of where the rule appears in the list.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub when: StylePredicate,
    pub tint: &'static str,
    pub precedence: u8,
}

impl StyleRule {
    pub const fn new(when: StylePredicate, tint: &'static str) -> Self {
        Self {
            when,
            tint,
            precedence: 0,
        }
    }

    pub const fn overriding(when: StylePredicate, tint: &'static str, precedence: u8) -> Self {
        Self {
            when,
            tint,
            precedence,
        }
    }
}

/// Corpus-wide aggregates computed once per block, before the row loop.
#[derive(Debug, Default)]
pub struct PayloadStats {
    total: usize,
    majorities: BTreeMap<String, String>,
}

impl PayloadStats {
    /// Compute aggregates for one block's records.
    ///
    /// The majority value per field is the most frequent non-empty
    /// stringified value; ties resolve to the lexicographically smallest
    /// value so the result is deterministic.
    pub fn compute(records: &[Record]) -> Self {
        let mut counts: BTreeMap<&str, BTreeMap<String, usize>> = BTreeMap::new();
        for record in records {
            for (field, value) in record {
                let text = stringify(value);
                if text.is_empty() {
                    continue;
                }
                *counts
                    .entry(field.as_str())
                    .or_default()
                    .entry(text)
                    .or_default() += 1;
            }
        }
        let majorities = counts
            .into_iter()
            .filter_map(|(field, values)| {
                values
                    .into_iter()
                    .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
                    .map(|(value, _)| (field.to_string(), value))
            })
            .collect();
        Self {
            total: records.len(),
            majorities,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn majority(&self, field: &str) -> Option<&str> {
        self.majorities.get(field).map(String::as_str)
    }
}

/// Evaluate a rule table against one record.
///
/// Returns the winning tint as a row style, or `None` for the neutral
/// style. Never fails.
pub fn style_for(record: &Record, rules: &[StyleRule], stats: &PayloadStats) -> Option<RowStyle> {
    rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| rule.when.matches(record, stats))
        .min_by_key(|(index, rule)| (std::cmp::Reverse(rule.precedence), *index))
        .map(|(_, rule)| RowStyle::tinted(rule.tint))
}
