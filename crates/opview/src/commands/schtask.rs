//! Scheduled task rendering.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("state", "Running"), tint::SUCCESS_SOFT),
    StyleRule::new(StylePredicate::FieldEquals("state", "Disabled"), tint::MUTED),
];

fn title(ctx: &TitleCtx) -> String {
    format!("Scheduled Tasks ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").copy(),
        Column::text("state").width(100),
        Column::text("next_run").width(180),
        Column::text("author").width(160),
        Column::text("path"),
    ];
    CommandSpec {
        name: "schtask",
        empty_message: "No scheduled tasks found",
        variants: vec![VariantSpec::new(
            "tasks",
            Probe::HasFields(&["name", "state"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
