//! Kerberos delegation rendering. Unconstrained delegation is the loudest
//! signal; constrained and resource-based fade accordingly. Target lists
//! join into one cell.

use serde_json::Value;

use crate::classify::Probe;
use crate::compose::{join_array, RowSource, TitleCtx};
use crate::decode::{str_field, Record};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("type", "unconstrained"), tint::RISK_STRONG),
    StyleRule::new(StylePredicate::FieldEquals("type", "constrained"), tint::WARN),
    StyleRule::new(StylePredicate::FieldEquals("type", "rbcd"), tint::WARN_FAINT),
];

fn prepare(record: &Record) -> Record {
    let mut row = record.clone();
    row.insert(
        "targets".to_string(),
        Value::String(join_array(record, "targets", ", ")),
    );
    row
}

fn title(ctx: &TitleCtx) -> String {
    let unconstrained = ctx.count(|row| str_field(row, "type") == Some("unconstrained"));
    format!(
        "Kerberos Delegation — {} accounts ({} unconstrained)",
        ctx.rows.len(),
        unconstrained
    )
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("account").copy(),
        Column::text("type").width(140),
        Column::text("targets"),
    ];
    CommandSpec {
        name: "kerb_delegation",
        empty_message: "No delegation configured",
        variants: vec![VariantSpec::new(
            "accounts",
            Probe::HasFields(&["account", "type"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title)
                .prepare(prepare)
                .styles(STYLES)],
        )],
    }
}
