//! Directory enumeration rendering.
//!
//! Listing objects (`path` + `entries`) and permission objects (`path` +
//! `acl`) are both two-field shapes; the classifier's specificity ordering
//! keeps them apart from generic single-field object probes.

use crate::classify::Probe;
use crate::compose::{key_value_columns, RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const ENTRY_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("type", "dir"), tint::INFO),
    StyleRule::overriding(StylePredicate::FieldTruthy("hidden"), tint::MUTED, 1),
];

const ACL_STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldContains("rights", "FullControl"),
    tint::WARN,
)];

fn listing_title(ctx: &TitleCtx) -> String {
    let path = ctx.object_str("path").unwrap_or("?");
    format!("Directory Listing — {} ({} entries)", path, ctx.rows.len())
}

fn info_title(_ctx: &TitleCtx) -> String {
    "File Permissions".to_string()
}

fn acl_title(ctx: &TitleCtx) -> String {
    format!("ACL Entries ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let entry_columns = vec![
        Column::text("name").copy(),
        Column::text("type").width(90),
        Column::size("size").width(110),
        Column::text("modified").width(180),
    ];
    let acl_columns = vec![
        Column::text("principal").copy(),
        Column::text("rights"),
        Column::text("inherited").width(100),
    ];
    CommandSpec {
        name: "ls",
        empty_message: "No directory entries found",
        variants: vec![
            VariantSpec::new(
                "listing",
                Probe::HasFields(&["path", "entries"]),
                vec![BlockSpec::new(
                    RowSource::NestedArray("entries"),
                    Schema::Fixed(entry_columns),
                    listing_title,
                )
                .styles(ENTRY_STYLES)],
            ),
            VariantSpec::new(
                "permissions",
                Probe::HasFields(&["path", "acl"]),
                vec![
                    BlockSpec::new(
                        RowSource::KeyValue(&[
                            ("Path", "path"),
                            ("Owner", "owner"),
                            ("Group", "group"),
                        ]),
                        Schema::Fixed(key_value_columns()),
                        info_title,
                    ),
                    BlockSpec::new(
                        RowSource::NestedArray("acl"),
                        Schema::Fixed(acl_columns),
                        acl_title,
                    )
                    .styles(ACL_STYLES),
                ],
            ),
        ],
    }
}
