//! Local group rendering.
//!
//! Member listings (discriminated by `sid`) and group listings
//! (discriminated by `comment`) are different shapes of the same command.
//! The well-known -500 RID and the Administrators group get attention
//! tints.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const MEMBER_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("type", "Group"), tint::INFO),
    StyleRule::overriding(StylePredicate::FieldContains("sid", "-500"), tint::ELEVATED, 1),
];

const GROUP_STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldEquals("name", "Administrators"),
    tint::WARN_FAINT,
)];

fn members_title(ctx: &TitleCtx) -> String {
    format!("Local Group Members ({})", ctx.rows.len())
}

fn groups_title(ctx: &TitleCtx) -> String {
    format!("Local Groups ({})", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let member_columns = vec![
        Column::text("name").copy(),
        Column::text("sid").width(220).copy(),
        Column::text("type").width(100),
        Column::text("source").width(140),
    ];
    let group_columns = vec![Column::text("name").width(200).copy(), Column::text("comment")];
    CommandSpec {
        name: "netlocalgroup",
        empty_message: "No group information found",
        variants: vec![
            VariantSpec::new(
                "members",
                Probe::HasFields(&["name", "sid"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(member_columns),
                    members_title,
                )
                .styles(MEMBER_STYLES)],
            ),
            VariantSpec::new(
                "groups",
                Probe::HasFields(&["name", "comment"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(group_columns),
                    groups_title,
                )
                .styles(GROUP_STYLES)],
            ),
        ],
    }
}
