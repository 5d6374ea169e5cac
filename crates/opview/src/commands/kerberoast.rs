//! Kerberoasting rendering. Service principals that yielded a ticket
//! hash get the warning tint.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::str_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldPresent("hash"),
    tint::WARN,
)];

fn title(ctx: &TitleCtx) -> String {
    let roasted = ctx.count(|row| str_field(row, "hash").is_some_and(|h| !h.is_empty()));
    format!("Kerberoasting — {}/{} roasted", roasted, ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("spn").copy(),
        Column::text("username").width(160).copy(),
        Column::text("hash").copy(),
    ];
    CommandSpec {
        name: "kerberoast",
        empty_message: "No service principals found",
        variants: vec![VariantSpec::new(
            "principals",
            Probe::HasFields(&["spn"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
