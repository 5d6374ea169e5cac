//! Process listing rendering. Same integrity ladder as the token views.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("integrity", "System"), tint::RISK_HIGH),
    StyleRule::new(StylePredicate::FieldEquals("integrity", "High"), tint::ELEVATED),
    StyleRule::new(StylePredicate::FieldEquals("integrity", "Low"), tint::MUTED),
];

fn title(ctx: &TitleCtx) -> String {
    format!("Processes ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::number("pid").width(80).copy().sortable(),
        Column::text("name"),
        Column::text("user").copy(),
        Column::text("arch").width(80),
        Column::text("integrity").width(100),
        Column::number("session").width(80),
    ];
    CommandSpec {
        name: "ps",
        empty_message: "No processes found",
        variants: vec![VariantSpec::new(
            "processes",
            Probe::HasFields(&["pid", "name"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
