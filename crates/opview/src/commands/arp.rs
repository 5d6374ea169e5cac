//! ARP cache rendering. Static entries get the informational tint since
//! they usually mean deliberate configuration worth a second look.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const STYLES: &[StyleRule] = &[StyleRule::new(
    StylePredicate::FieldEquals("type", "static"),
    tint::INFO,
)];

fn title(ctx: &TitleCtx) -> String {
    format!("ARP Cache ({} entries)", ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("ip").width(140).copy(),
        Column::text("mac").width(160).copy(),
        Column::text("type").width(100),
        Column::text("interface"),
    ];
    CommandSpec {
        name: "arp",
        empty_message: "No ARP entries found",
        variants: vec![VariantSpec::new(
            "entries",
            Probe::HasFields(&["ip", "mac"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
