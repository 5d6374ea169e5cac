//! Token privilege rendering.
//!
//! Dangerous privileges tint as risk, but a disabled privilege is muted
//! even when its name is on the dangerous list: disabled-state dominates
//! risk signaling for triage, so the disabled rule carries the higher
//! precedence rather than relying on list position.

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::str_field;
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const DANGEROUS_PRIVILEGES: &[&str] = &[
    "SeDebugPrivilege",
    "SeImpersonatePrivilege",
    "SeAssignPrimaryTokenPrivilege",
    "SeTcbPrivilege",
    "SeBackupPrivilege",
    "SeRestorePrivilege",
    "SeLoadDriverPrivilege",
    "SeTakeOwnershipPrivilege",
];

const STYLES: &[StyleRule] = &[
    StyleRule::new(
        StylePredicate::FieldIn("name", DANGEROUS_PRIVILEGES),
        tint::ELEVATED,
    ),
    StyleRule::new(StylePredicate::FieldEquals("status", "Enabled"), tint::SUCCESS_SOFT),
    StyleRule::overriding(StylePredicate::FieldEquals("status", "Disabled"), tint::MUTED, 2),
];

fn title(ctx: &TitleCtx) -> String {
    let enabled = ctx.count(|row| str_field(row, "status") == Some("Enabled"));
    format!("Token Privileges ({}/{} enabled)", enabled, ctx.rows.len())
}

pub fn spec() -> CommandSpec {
    let columns = vec![
        Column::text("name").copy(),
        Column::text("status").width(100),
        Column::text("description"),
    ];
    CommandSpec {
        name: "getprivs",
        empty_message: "No privileges found",
        variants: vec![VariantSpec::new(
            "privileges",
            Probe::HasFields(&["name", "status"]),
            vec![BlockSpec::new(RowSource::Root, Schema::Fixed(columns), title).styles(STYLES)],
        )],
    }
}
