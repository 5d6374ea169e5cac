//! Stolen-token report rendering.
//!
//! One object: identity/source/integrity summary first, then the token's
//! privilege list. Title carries enabled-privilege count over total.

use crate::classify::Probe;
use crate::compose::{key_value_columns, RowSource, TitleCtx};
use crate::decode::str_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const PRIVILEGE_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("status", "Enabled"), tint::SUCCESS_SOFT),
    StyleRule::overriding(StylePredicate::FieldEquals("status", "Disabled"), tint::MUTED, 2),
];

const INFO_FIELDS: &[(&str, &str)] = &[
    ("Identity", "identity"),
    ("Source", "source"),
    ("Integrity", "integrity"),
    ("Session", "session"),
    ("Elevated", "elevated"),
];

fn info_title(_ctx: &TitleCtx) -> String {
    "Token Info".to_string()
}

fn privileges_title(ctx: &TitleCtx) -> String {
    let enabled = ctx.count(|row| str_field(row, "status") == Some("Enabled"));
    format!("Token Privileges ({}/{} enabled)", enabled, ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let privilege_columns = vec![
        Column::text("name").copy(),
        Column::text("status").width(100),
        Column::text("description"),
    ];
    CommandSpec {
        name: "stealtoken",
        empty_message: "No token information available",
        variants: vec![VariantSpec::new(
            "token-info",
            Probe::HasFields(&["identity", "privileges"]),
            vec![
                BlockSpec::new(
                    RowSource::KeyValue(INFO_FIELDS),
                    Schema::Fixed(key_value_columns()),
                    info_title,
                ),
                BlockSpec::new(
                    RowSource::NestedArray("privileges"),
                    Schema::Fixed(privilege_columns),
                    privileges_title,
                )
                .styles(PRIVILEGE_STYLES),
            ],
        )],
    }
}
