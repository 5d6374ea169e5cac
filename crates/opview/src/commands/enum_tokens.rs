//! Token enumeration rendering.
//!
//! Two shapes from the same command: the aggregated unique-owners view
//! (discriminated by `count`) and the flat per-process view (discriminated
//! by `pid`). Integrity level drives the risk tint in both.

use serde_json::Value;

use crate::classify::Probe;
use crate::compose::{join_array, RowSource, TitleCtx};
use crate::decode::Record;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const UNIQUE_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("integrity", "System"), tint::RISK_HIGH),
    StyleRule::new(StylePredicate::FieldEquals("integrity", "High"), tint::ELEVATED),
];

const LIST_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("integrity", "System"), tint::RISK_HIGH),
    StyleRule::new(StylePredicate::FieldEquals("integrity", "High"), tint::ELEVATED),
    StyleRule::new(StylePredicate::FieldEquals("integrity", "Low"), tint::MUTED),
];

/// Flatten the aggregate record: session and example-process lists join
/// into display text, `count` becomes the `processes` column.
fn prepare_unique(record: &Record) -> Record {
    let mut row = Record::new();
    for field in ["user", "integrity"] {
        if let Some(value) = record.get(field) {
            row.insert(field.to_string(), value.clone());
        }
    }
    if let Some(count) = record.get("count") {
        row.insert("processes".to_string(), count.clone());
    }
    row.insert(
        "sessions".to_string(),
        Value::String(join_array(record, "sessions", ", ")),
    );
    row.insert(
        "examples".to_string(),
        Value::String(join_array(record, "processes", ", ")),
    );
    row
}

fn unique_title(ctx: &TitleCtx) -> String {
    format!("Unique Token Owners ({})", ctx.rows.len())
}

fn list_title(ctx: &TitleCtx) -> String {
    format!("Process Tokens ({} processes)", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let unique_columns = vec![
        Column::text("user").copy(),
        Column::text("integrity").width(100),
        Column::number("processes").width(90),
        Column::text("sessions").width(100),
        Column::text("examples"),
    ];
    let list_columns = vec![
        Column::number("pid").width(80).copy(),
        Column::text("process"),
        Column::text("user").copy(),
        Column::text("integrity").width(100),
        Column::number("session").width(80),
    ];
    CommandSpec {
        name: "enum_tokens",
        empty_message: "No tokens found",
        variants: vec![
            VariantSpec::new(
                "unique-owners",
                Probe::HasFields(&["count"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(unique_columns),
                    unique_title,
                )
                .prepare(prepare_unique)
                .styles(UNIQUE_STYLES)],
            ),
            VariantSpec::new(
                "per-process",
                Probe::HasFields(&["pid"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(list_columns),
                    list_title,
                )
                .styles(LIST_STYLES)],
            ),
        ],
    }
}
