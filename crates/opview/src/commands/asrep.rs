//! AS-REP roasting rendering. Accounts that yielded a hash get the
//! warning tint; the title carries the roastable count.

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
    let roastable = ctx.count(|row| str_field(row, "hash").is_some_and(|h| !h.is_empty()));
    format!("AS-REP Roasting — {}/{} roastable", roastable, ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("username").width(180).copy(),
        Column::text("hash").copy(),
        Column::text("message"),
    ];
    CommandSpec {
        name: "asrep",
        empty_message: "No AS-REP roastable accounts found",
        variants: vec![VariantSpec::new(
            "accounts",
            Probe::HasFields(&["username"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
