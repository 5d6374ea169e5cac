//! Universal pipeline contract, enforced across every command descriptor:
//! fallback totality, the empty-input placeholder, the per-command empty
//! message, and the exact wire schema of the output.

use opview::assemble::NO_RESPONSE_YET;
use opview::commands::{spec_for, KNOWN_COMMANDS};
use opview::{render, RenderedOutput, TaskStatus};

fn fragments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test]
fn error_status_concatenates_fragments_for_every_command() {
    for command in KNOWN_COMMANDS {
        let out = render(command, TaskStatus::Error, &fragments(&["boom", "token"]));
        assert_eq!(
            out,
            RenderedOutput::plaintext("boomtoken"),
            "{} must concatenate error fragments verbatim",
            command
        );
    }
}

#[test]
fn empty_fragments_yield_placeholder_for_every_command() {
    for command in KNOWN_COMMANDS {
        let out = render(command, TaskStatus::Completed, &[]);
        assert_eq!(
            out,
            RenderedOutput::plaintext(NO_RESPONSE_YET),
            "{} must show the no-response placeholder",
            command
        );
    }
}

#[test]
fn malformed_payload_passes_through_for_every_command() {
    let garbage = "Exception: access denied {truncated";
    for command in KNOWN_COMMANDS {
        let out = render(command, TaskStatus::Completed, &fragments(&[garbage]));
        assert_eq!(
            out,
            RenderedOutput::plaintext(garbage),
            "{} must pass malformed output through unchanged",
            command
        );
    }
}

#[test]
fn empty_array_yields_domain_message_for_every_command() {
    for command in KNOWN_COMMANDS {
        let expected = spec_for(command).empty_message;
        let out = render(command, TaskStatus::Completed, &fragments(&["[]"]));
        assert_eq!(
            out,
            RenderedOutput::plaintext(expected),
            "{} must use its own empty message",
            command
        );
    }
}

#[test]
fn fragments_reassemble_across_arbitrary_split_points() {
    // same logical payload, split mid-token
    let whole = render(
        "arp",
        TaskStatus::Completed,
        &fragments(&[r#"[{"ip":"10.0.0.1","mac":"aa:bb","type":"dynamic","interface":"eth0"}]"#]),
    );
    let split = render(
        "arp",
        TaskStatus::Completed,
        &fragments(&[r#"[{"ip":"10.0.0.1","mac":"aa:b"#, r#"b","type":"dyna"#, r#"mic","interface":"eth0"}]"#]),
    );
    assert_eq!(whole, split, "fragment boundaries must not affect output");
}

#[test]
fn rendering_is_deterministic() {
    let parts = fragments(&[r#"[{"user":"SYSTEM","count":12,"integrity":"System"}]"#]);
    let first = render("enum_tokens", TaskStatus::Completed, &parts);
    for _ in 0..5 {
        assert_eq!(
            render("enum_tokens", TaskStatus::Completed, &parts),
            first,
            "same payload must render identically on every call"
        );
    }
}

#[test]
fn output_wire_schema_matches_renderer_contract() {
    let out = render(
        "arp",
        TaskStatus::Completed,
        &fragments(&[r#"[{"ip":"10.0.0.1","mac":"aa:bb","type":"static","interface":"eth0"}]"#]),
    );
    let wire = serde_json::to_value(&out).expect("output must serialize");

    let table = wire.get("table").expect("table form");
    let block = &table[0];
    let headers = block["headers"].as_array().expect("headers array");
    assert_eq!(headers.len(), 4);

    // fixed-width header
    assert_eq!(headers[0]["plaintext"], "ip");
    assert_eq!(headers[0]["type"], "string");
    assert_eq!(headers[0]["width"], 140);
    assert!(headers[0].get("fillWidth").is_none());

    // fill-width header
    assert_eq!(headers[3]["plaintext"], "interface");
    assert_eq!(headers[3]["fillWidth"], true);
    assert!(headers[3].get("width").is_none());

    let row = &block["rows"][0];
    assert_eq!(row["ip"]["plaintext"], "10.0.0.1");
    assert_eq!(row["ip"]["copyIcon"], true);
    assert!(row["interface"].get("copyIcon").is_none());
    assert_eq!(
        row["rowStyle"]["backgroundColor"],
        "rgba(100,149,237,0.1)",
        "static entries carry the informational tint"
    );
    assert!(block["title"].as_str().expect("title").contains("1 entries"));
}

#[test]
fn neutral_rows_omit_row_style_on_the_wire() {
    let out = render(
        "arp",
        TaskStatus::Completed,
        &fragments(&[r#"[{"ip":"10.0.0.2","mac":"cc:dd","type":"dynamic","interface":"eth0"}]"#]),
    );
    let wire = serde_json::to_value(&out).expect("output must serialize");
    let row = &wire["table"][0]["rows"][0];
    assert!(
        row.get("rowStyle").is_none(),
        "unmatched rows must serialize without rowStyle"
    );
}

#[test]
fn unknown_command_renders_through_generic_descriptor() {
    let out = render(
        "future_capability",
        TaskStatus::Completed,
        &fragments(&[r#"[{"b":2,"a":1},{"c":3,"a":1}]"#]),
    );
    let blocks = out.as_table().expect("generic table output");
    let keys: Vec<&str> = blocks[0].headers.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, ["a", "b", "c"], "generic schema is union, sorted");
    assert_eq!(blocks[0].title, "Results (2 entries)");
}
