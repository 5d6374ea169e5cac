//! Certificate store rendering. Exportable private keys are the signal;
//! expiry mutes it.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::bool_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldTruthy("has_private_key"), tint::WARN),
    StyleRule::overriding(StylePredicate::FieldTruthy("expired"), tint::MUTED, 2),
];

fn title(ctx: &TitleCtx) -> String {
    let keyed = ctx.count(|row| bool_field(row, "has_private_key"));
    format!(
        "Certificates ({} total, {} with private keys)",
        ctx.rows.len(),
        keyed
    )
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("subject").copy(),
        Column::text("issuer"),
        Column::text("store").width(120),
        Column::text("expires").width(160),
    ];
    CommandSpec {
        name: "certstore",
        empty_message: "No certificates found",
        variants: vec![VariantSpec::new(
            "certificates",
            Probe::HasFields(&["subject", "store"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
