//! Prefetch file rendering. Frequently-run binaries get the
//! informational tint.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldAtLeast("run_count", 50.0),
    tint::INFO,
)];

fn title(ctx: &TitleCtx) -> String {
    format!("Prefetch Files ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").copy(),
        Column::number("run_count").width(110).sortable(),
        Column::text("last_run").width(180),
    ];
    CommandSpec {
        name: "prefetch",
        empty_message: "No prefetch entries found",
        variants: vec![VariantSpec::new(
            "entries",
            Probe::HasFields(&["name", "run_count"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
