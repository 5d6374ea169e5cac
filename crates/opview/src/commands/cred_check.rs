//! Credential check rendering. Valid credentials get the success tint;
//! a credential that is both valid and administrative outranks it.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::bool_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldTruthy("valid"), tint::SUCCESS_SOFT),
    StyleRule::overriding(
        StylePredicate::AllOf(&[
            StylePredicate::FieldTruthy("valid"),
            StylePredicate::FieldTruthy("admin"),
        ]),
        tint::ELEVATED,
        1,
    ),
];

fn title(ctx: &TitleCtx) -> String {
    let valid = ctx.count(|row| bool_field(row, "valid"));
    let admin = ctx.count(|row| bool_field(row, "valid") && bool_field(row, "admin"));
    format!("Credential Check — {} valid, {} admin", valid, admin)
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("username").copy(),
        Column::text("domain").width(140),
        Column::text("secret").copy(),
        Column::text("source").width(120),
    ];
    CommandSpec {
        name: "cred_check",
        empty_message: "No credentials tested",
        variants: vec![VariantSpec::new(
            "results",
            Probe::HasFields(&["username", "valid"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
