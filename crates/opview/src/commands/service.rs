//! Service listing rendering. Auto-start services that are not running
//! are the interesting ones; they outrank the plain running tint.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::str_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("state", "Running"), tint::SUCCESS_SOFT),
    StyleRule::overriding(
        StylePredicate::AllOf(&[
            StylePredicate::FieldEquals("start_type", "Auto"),
            StylePredicate::FieldEquals("state", "Stopped"),
        ]),
        tint::WARN,
        1,
    ),
];

fn title(ctx: &TitleCtx) -> String {
    let running = ctx.count(|row| str_field(row, "state") == Some("Running"));
    format!("Services ({} total, {} running)", ctx.rows.len(), running)
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").width(180).copy(),
        Column::text("display_name"),
        Column::text("state").width(100),
        Column::text("start_type").width(110),
        Column::text("path"),
    ];
    CommandSpec {
        name: "service",
        empty_message: "No services found",
        variants: vec![VariantSpec::new(
            "services",
            Probe::HasFields(&["name", "start_type"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
