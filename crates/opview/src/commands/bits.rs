//! BITS job rendering.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("state", "TRANSFERRING"), tint::SUCCESS_SOFT),
    StyleRule::new(StylePredicate::FieldEquals("state", "SUSPENDED"), tint::MUTED),
];

fn title(ctx: &TitleCtx) -> String {
    format!("BITS Jobs ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").width(180).copy(),
        Column::text("state").width(130),
        Column::text("url").copy(),
        Column::text("owner").width(160),
    ];
    CommandSpec {
        name: "bits",
        empty_message: "No BITS jobs found",
        variants: vec![VariantSpec::new(
            "jobs",
            Probe::HasFields(&["name", "url"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
