//! Host triage rendering.
//!
//! Findings are free-form records, so columns derive dynamically. Severity
//! drives the tint ladder; below that, the aggregate minority rule
//! surfaces findings whose category differs from the bulk of the payload.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::NotMajority("category"), tint::INFO),
    StyleRule::overriding(StylePredicate::FieldEquals("severity", "high"), tint::ELEVATED, 1),
    StyleRule::overriding(StylePredicate::FieldEquals("severity", "critical"), tint::RISK_HIGH, 2),
];

fn title(ctx: &TitleCtx) -> String {
    format!("Triage Findings ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "triage",
        empty_message: "No findings",
        variants: vec![VariantSpec::new(
            "findings",
            Probe::AnyRecords,
            vec![BlockSpec::new(
                RowSource::Root,
                Schema::Dynamic {
                    priority: &["severity", "category", "finding"],
                    key_fields: &["severity"],
                    copy_fields: &[],
                },
                title,
            )
            .styles(STYLES)],
        )],
    }
}
