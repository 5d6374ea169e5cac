//! Kerberos ticket cache rendering. Expired tickets are muted; TGTs
//! (krbtgt service) get the informational tint.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldContains("server", "krbtgt"), tint::INFO),
    StyleRule::overriding(StylePredicate::FieldTruthy("expired"), tint::MUTED, 1),
];

fn title(ctx: &TitleCtx) -> String {
    format!("Kerberos Tickets ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("client").copy(),
        Column::text("server").copy(),
        Column::text("starttime").width(160),
        Column::text("endtime").width(160),
        Column::text("flags").width(140),
        Column::text("etype").width(100),
    ];
    CommandSpec {
        name: "klist",
        empty_message: "No Kerberos tickets found",
        variants: vec![VariantSpec::new(
            "tickets",
            Probe::HasFields(&["client", "server"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
