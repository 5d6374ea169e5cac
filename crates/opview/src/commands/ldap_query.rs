//! LDAP query rendering.
//!
//! DACL mode (discriminated by `mode: "dacl"`) renders the ACE list with
//! risk tints. Regular queries return arbitrary attribute sets, so the
//! entries block derives its columns dynamically: `dn` and the well-known
//! identifying attributes first, everything else alphabetical.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const DACL_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("risk", "dangerous"), tint::RISK_STRONG),
    StyleRule::new(StylePredicate::FieldEquals("risk", "notable"), tint::ELEVATED),
];

const PRIORITY_ATTRS: &[&str] = &[
    "dn",
    "sAMAccountName",
    "cn",
    "displayName",
    "userPrincipalName",
    "dNSHostName",
    "description",
];

fn dacl_title(ctx: &TitleCtx) -> String {
    let target = ctx.object_str("target").unwrap_or("unknown target");
    let mut title = format!("DACL — {}", target);
    if let Some(dangerous) = ctx.object_u64("dangerous").filter(|&n| n > 0) {
        title.push_str(&format!(" ({} dangerous)", dangerous));
    }
    title
}

fn entries_title(ctx: &TitleCtx) -> String {
    let query = ctx.object_str("query").unwrap_or("LDAP Query");
    let count = ctx
        .object_u64("count")
        .unwrap_or(ctx.rows.len() as u64);
    format!("{} — {} result(s)", query, count)
}

pub fn spec() -> CommandSpec {
    let dacl_columns = vec![
        Column::text("principal").copy(),
        Column::text("permissions"),
        Column::text("risk").width(100),
        Column::text("sid").width(200).copy(),
    ];
    CommandSpec {
        name: "ldap_query",
        empty_message: "No LDAP results found",
        variants: vec![
            VariantSpec::new(
                "dacl",
                Probe::FieldOneOf("mode", &["dacl"]),
                vec![BlockSpec::new(
                    RowSource::NestedArray("aces"),
                    Schema::Fixed(dacl_columns),
                    dacl_title,
                )
                .styles(DACL_STYLES)],
            ),
            VariantSpec::new(
                "entries",
                Probe::HasFields(&["entries"]),
                vec![BlockSpec::new(
                    RowSource::NestedArray("entries"),
                    Schema::Dynamic {
                        priority: PRIORITY_ATTRS,
                        key_fields: &["sAMAccountName", "cn"],
                        copy_fields: &["dn", "sAMAccountName"],
                    },
                    entries_title,
                )],
            ),
        ],
    }
}
