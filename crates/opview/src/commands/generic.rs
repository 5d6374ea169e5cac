//! Fallback descriptor for commands without a bespoke module.
//!
//! Keeps the always-renderable guarantee for capabilities added upstream
//! before a descriptor exists: record arrays render with a fully dynamic
//! schema, single objects render as a one-row table.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::schema::Schema;

const DYNAMIC: Schema = Schema::Dynamic {
    priority: &[],
    key_fields: &[],
    copy_fields: &[],
};

fn records_title(ctx: &TitleCtx) -> String {
    format!("Results ({} entries)", ctx.rows.len())
}

fn object_title(_ctx: &TitleCtx) -> String {
    "Result".to_string()
}

pub fn spec() -> CommandSpec {
    CommandSpec {
        name: "generic",
        empty_message: "No entries found",
        variants: vec![
            VariantSpec::new(
                "records",
                Probe::AnyRecords,
                vec![BlockSpec::new(RowSource::Root, DYNAMIC, records_title)],
            ),
            VariantSpec::new(
                "object",
                Probe::AnyObject,
                vec![BlockSpec::new(RowSource::Root, DYNAMIC, object_title)],
            ),
        ],
    }
}
