//! Credential spray / user enumeration rendering.
//!
//! The enumeration sub-mode reports per-user existence (`status` is one of
//! exists/asrep/not_found); the spray sub-mode reports attempt outcomes
//! (`success` plus a server message). The enumeration probe pins the status
//! value set, so a spray record with an unrelated `status` string cannot
//! misclassify.

use serde_json::Value;

use crate::classify::Probe;
use crate::compose::{RowSource, TitleCtx};
use crate::decode::{bool_field, str_field, Record};
use crate::pipeline::{BlockSpec, CommandSpec, VariantSpec};
use crate::render::Column;
use crate::schema::Schema;
use crate::style::{tint, StylePredicate, StyleRule};

const ENUMERATE_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("status", "exists"), tint::SUCCESS_SOFT),
    StyleRule::new(StylePredicate::FieldEquals("status", "asrep"), tint::WARN),
];

const SPRAY_STYLES: &[StyleRule] = &[
    StyleRule::new(StylePredicate::FieldEquals("result", "VALID"), tint::SUCCESS),
    StyleRule::new(StylePredicate::FieldEquals("result", "LOCKED"), tint::RISK_HIGH),
    StyleRule::new(StylePredicate::FieldEquals("result", "EXPIRED"), tint::ELEVATED),
];

/// Collapse `success` + server message into the displayed result label.
fn prepare_spray(record: &Record) -> Record {
    let message = str_field(record, "message").unwrap_or("");
    let result = if bool_field(record, "success") {
        "VALID"
    } else if message.contains("locked") || message.contains("REVOKED") {
        "LOCKED"
    } else if message.contains("expired") || message.contains("change password") {
        "EXPIRED"
    } else {
        "failed"
    };
    let mut row = record.clone();
    row.insert("result".to_string(), Value::String(result.to_string()));
    row
}

fn enumerate_title(ctx: &TitleCtx) -> String {
    let valid = ctx.count(|row| {
        matches!(str_field(row, "status"), Some("exists") | Some("asrep"))
    });
    let asrep = ctx.count(|row| str_field(row, "status") == Some("asrep"));
    let mut title = format!("User Enumeration — {}/{} valid", valid, ctx.rows.len());
    if asrep > 0 {
        title.push_str(&format!(" ({} AS-REP roastable)", asrep));
    }
    title
}

fn spray_title(ctx: &TitleCtx) -> String {
    let valid = ctx.count(|row| str_field(row, "result") == Some("VALID"));
    let locked = ctx.count(|row| str_field(row, "result") == Some("LOCKED"));
    format!(
        "Password Spray — {} valid, {} locked, {} failed",
        valid,
        locked,
        ctx.rows.len() - valid - locked
    )
}

pub fn spec() -> CommandSpec {
    let enumerate_columns = vec![
        Column::text("username").copy(),
        Column::text("status").width(100),
        Column::text("message"),
    ];
    let spray_columns = vec![
        Column::text("username").copy(),
        Column::text("result").width(80),
        Column::text("message"),
    ];
    CommandSpec {
        name: "spray",
        empty_message: "No results",
        variants: vec![
            VariantSpec::new(
                "user-enumeration",
                Probe::FieldOneOf("status", &["exists", "asrep", "not_found"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(enumerate_columns),
                    enumerate_title,
                )
                .styles(ENUMERATE_STYLES)],
            ),
            VariantSpec::new(
                "spray",
                Probe::HasFields(&["success"]),
                vec![BlockSpec::new(
                    RowSource::Root,
                    Schema::Fixed(spray_columns),
                    spray_title,
                )
                .prepare(prepare_spray)
                .styles(SPRAY_STYLES)],
            ),
        ],
    }
}
