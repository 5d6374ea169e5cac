//! Open-handle enumeration rendering.
//!
//! Single object payload, up to three blocks in fixed order: the per-type
//! summary, then the handle details, then an optional tool note. Handle
//! values format as zero-padded hex; unnamed objects read "(unnamed)".

use serde_json::Value;

use crate::classify::Probe;
use crate::compose::{key_value_columns, RowSource, TitleCtx};
use crate::decode::{str_field, u64_field, Record};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const DETAIL_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("type", "File"), tint::INFO),
    StyleRule::new(StylePredicate::FieldEquals("type", "Key"), tint::WARN_FAINT),
    StyleRule::new(
        StylePredicate::FieldIn("type", &["Process", "Thread"]),
        tint::RISK_FAINT,
    ),
];

fn prepare_handle(record: &Record) -> Record {
    let mut row = record.clone();
    if let Some(handle) = u64_field(record, "handle") {
        row.insert(
            "handle".to_string(),
            Value::String(format!("0x{:04X}", handle)),
        );
    }
    if str_field(record, "name").map_or(true, str::is_empty) {
        row.insert("name".to_string(), Value::String("(unnamed)".to_string()));
    }
    row
}

fn summary_title(ctx: &TitleCtx) -> String {
    let pid = ctx.object_u64("pid").unwrap_or(0);
    let total = ctx.object_u64("total").unwrap_or(0);
    // tools report shown as 0 when the cap did not apply
    let shown = ctx.object_u64("shown").filter(|&n| n != 0).unwrap_or(total);
    format!("Handle Type Summary (PID {}: {} of {} handles)", pid, shown, total)
}

fn detail_title(ctx: &TitleCtx) -> String {
    format!("Handle Details ({} shown)", ctx.rows.len())
}

fn note_title(_ctx: &TitleCtx) -> String {
    "Note".to_string()
}

pub fn spec() -> CommandSpec {
    let summary_columns = vec![Column::text("type"), Column::number("count").width(100)];
    let detail_columns = vec![
        Column::text("handle").width(90),
        Column::text("type").width(200),
        Column::text("name"),
    ];
    CommandSpec {
        name: "handles",
        empty_message: "No handles found",
        variants: vec![VariantSpec::new(
            "report",
            Probe::AnyObject,
            vec![
                BlockSpec::new(
                    RowSource::NestedArray("summary"),
                    Schema::Fixed(summary_columns),
                    summary_title,
                )
                .optional(),
                BlockSpec::new(
                    RowSource::NestedArray("handles"),
                    Schema::Fixed(detail_columns),
                    detail_title,
                )
                .prepare(prepare_handle)
                .styles(DETAIL_STYLES)
                .optional(),
                BlockSpec::new(
                    RowSource::KeyValue(&[("Note", "note")]),
                    Schema::Fixed(key_value_columns()),
                    note_title,
                )
                .optional(),
            ],
        )],
    }
}
