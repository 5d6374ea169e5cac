//! SMB share rendering.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::bool_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldTruthy("writable"),
    tint::SUCCESS_SOFT,
)];

fn title(ctx: &TitleCtx) -> String {
    let writable = ctx.count(|row| bool_field(row, "writable"));
    format!("SMB Shares ({} total, {} writable)", ctx.rows.len(), writable)
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").width(160).copy(),
        Column::text("path").copy(),
        Column::text("description"),
    ];
    CommandSpec {
        name: "smb",
        empty_message: "No shares found",
        variants: vec![VariantSpec::new(
            "shares",
            Probe::HasFields(&["name", "path"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
