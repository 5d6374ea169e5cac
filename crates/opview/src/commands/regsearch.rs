//! Registry search rendering.
//!
//! Hits carry whatever fields the search produced, so columns derive
//! dynamically with the key path and value fields hoisted to the front.
//! Values mentioning passwords get the warning tint.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldContains("value_data", "password"),
    tint::WARN,
)];

fn title(ctx: &TitleCtx) -> String {
    format!("Registry Search ({} hits)", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "regsearch",
        empty_message: "No registry matches found",
        variants: vec![VariantSpec::new(
            "hits",
            Probe::AnyRecords,
            vec![BlockSpec::new(
                RowSource::Root,
                Schema::Dynamic {
                    priority: &["key", "value_name", "value_data"],
                    key_fields: &["value_name"],
                    copy_fields: &["key", "value_data"],
                },
                title,
            )
            .styles(STYLES)],
        )],
    }
}
