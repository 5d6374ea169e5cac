//! Port scan rendering. Open ports carry the positive tint; the title
//! leads with the open count since that is what the operator scans for.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::str_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("state", "open"), tint::SUCCESS_SOFT),
    StyleRule::new(StylePredicate::FieldEquals("state", "filtered"), tint::WARN_FAINT),
];

fn title(ctx: &TitleCtx) -> String {
    let open = ctx.count(|row| str_field(row, "state") == Some("open"));
    format!("Port Scan — {}/{} open", open, ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("host").width(160).copy(),
        Column::number("port").width(80),
        Column::text("service").width(140),
        Column::text("state").width(100),
        Column::text("banner"),
    ];
    CommandSpec {
        name: "portscan",
        empty_message: "No scan results found",
        variants: vec![VariantSpec::new(
            "results",
            Probe::HasFields(&["host", "port"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
