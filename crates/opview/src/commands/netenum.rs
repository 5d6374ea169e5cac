//! Network enumeration rendering.
//!
//! The domain-info sub-mode returns a single object rendered as a
//! field/value block plus an optional trusts table; every other sub-mode
//! returns a flat entry array.

use crate::classify::Probe;
use crate::compose::{key_value_columns, RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;

const DOMAIN_FIELDS: &[(&str, &str)] = &[
    ("DC Name", "dc_name"),
    ("DC Address", "dc_address"),
    ("Domain", "domain"),
    ("Forest", "forest"),
    ("DC Site", "dc_site"),
    ("Client Site", "client_site"),
    ("Min Password Length", "min_password_length"),
    ("Max Password Age (days)", "max_password_age_days"),
    ("Min Password Age (days)", "min_password_age_days"),
    ("Password History Length", "password_history_length"),
    ("Force Logoff", "force_logoff"),
];

fn info_title(_ctx: &TitleCtx) -> String {
    "Domain Info".to_string()
}

fn trusts_title(ctx: &TitleCtx) -> String {
    format!("Domain Trusts ({})", ctx.rows.len())
}

fn entries_title(ctx: &TitleCtx) -> String {
    format!("Net Enum ({} entries)", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let trust_columns = vec![
        Column::text("name").copy(),
        Column::text("dns"),
        Column::text("flags"),
    ];
    let entry_columns = vec![
        Column::text("name").copy(),
        Column::text("type").width(120),
        Column::text("comment"),
        Column::text("source").width(160),
    ];
    CommandSpec {
        name: "netenum",
        empty_message: "No results found",
        variants: vec![
            VariantSpec::new(
                "domain-info",
                Probe::AnyObject,
                vec![
                    BlockSpec::new(
                        RowSource::KeyValue(DOMAIN_FIELDS),
                        Schema::Fixed(key_value_columns()),
                        info_title,
                    ),
                    BlockSpec::new(
                        RowSource::NestedArray("trusts"),
                        Schema::Fixed(trust_columns),
                        trusts_title,
                    )
                    .optional(),
                ],
            ),
            VariantSpec::new(
                "entries",
                Probe::AnyRecords,
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(entry_columns),
                    entries_title,
                )],
            ),
        ],
    }
}
