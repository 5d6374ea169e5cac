//! Per-command shape scenarios: variant discrimination, multi-block
//! ordering, dynamic schemas, computed titles, and style precedence.

use opview::{render, RenderedOutput, TaskStatus};

fn fragments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn table(out: &RenderedOutput) -> &[opview::TableBlock] {
    out.as_table().expect("expected table output")
}

// ---------------------------------------------------------------------------
// enum_tokens: two variants of one command
// ---------------------------------------------------------------------------

#[test]
fn enum_tokens_unique_variant_discriminated_by_count() {
    let out = render(
        "enum_tokens",
        TaskStatus::Completed,
        &fragments(&[r#"[{"user":"CORP\\svc","integrity":"High","count":3,
            "sessions":[0,1],"processes":["svchost.exe","lsass.exe"]}]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "Unique Token Owners (1)");
    let row = &blocks[0].rows[0];
    assert_eq!(row.cells["processes"].plaintext, "3");
    assert_eq!(row.cells["sessions"].plaintext, "0, 1");
    assert_eq!(row.cells["examples"].plaintext, "svchost.exe, lsass.exe");
    assert_eq!(
        row.style.as_ref().and_then(|s| s.background_color.as_deref()),
        Some("rgba(255,165,0,0.15)"),
        "High integrity gets the elevated tint"
    );
}

#[test]
fn enum_tokens_list_variant_discriminated_by_pid() {
    let out = render(
        "enum_tokens",
        TaskStatus::Completed,
        &fragments(&[r#"[{"pid":624,"process":"lsass.exe","user":"SYSTEM",
            "integrity":"System","session":0}]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "Process Tokens (1 processes)");
    assert_eq!(
        blocks[0].rows[0]
            .style
            .as_ref()
            .and_then(|s| s.background_color.as_deref()),
        Some("rgba(255,0,0,0.15)")
    );
}

// ---------------------------------------------------------------------------
// spray: value-set discrimination and computed result column
// ---------------------------------------------------------------------------

#[test]
fn spray_enumeration_variant_counts_valid_and_roastable() {
    let out = render(
        "spray",
        TaskStatus::Completed,
        &fragments(&[r#"[
            {"username":"alice","status":"exists","message":""},
            {"username":"bob","status":"asrep","message":"no preauth"},
            {"username":"carol","status":"not_found","message":""}
        ]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "User Enumeration — 2/3 valid (1 AS-REP roastable)");
}

#[test]
fn spray_variant_derives_result_labels() {
    let out = render(
        "spray",
        TaskStatus::Completed,
        &fragments(&[r#"[
            {"username":"alice","success":true,"message":"ok"},
            {"username":"bob","success":false,"message":"account locked out"},
            {"username":"carol","success":false,"message":"password expired"},
            {"username":"dave","success":false,"message":"bad password"}
        ]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "Password Spray — 1 valid, 1 locked, 2 failed");
    let results: Vec<&str> = blocks[0]
        .rows
        .iter()
        .map(|row| row.cells["result"].plaintext.as_str())
        .collect();
    assert_eq!(results, ["VALID", "LOCKED", "EXPIRED", "failed"]);
}

#[test]
fn spray_server_messages_render_verbatim() {
    // declared columns show values untouched, quotes included
    let out = render(
        "spray",
        TaskStatus::Completed,
        &fragments(&[r#"[{"username":"dave","success":false,"message":"\"bad password\""}]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].rows[0].cells["message"].plaintext, "\"bad password\"");
}

// ---------------------------------------------------------------------------
// ldap_query: dacl vs dynamic entries
// ---------------------------------------------------------------------------

#[test]
fn ldap_dacl_variant_tints_dangerous_aces() {
    let out = render(
        "ldap_query",
        TaskStatus::Completed,
        &fragments(&[r#"{"mode":"dacl","target":"CN=Domain Admins","dangerous":1,"aces":[
            {"principal":"Everyone","permissions":"GenericAll","risk":"dangerous","sid":"S-1-1-0"}
        ]}"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "DACL — CN=Domain Admins (1 dangerous)");
    assert_eq!(
        blocks[0].rows[0]
            .style
            .as_ref()
            .and_then(|s| s.background_color.as_deref()),
        Some("rgba(255,0,0,0.2)")
    );
}

#[test]
fn ldap_entries_derive_dynamic_columns_deterministically() {
    let forward = render(
        "ldap_query",
        TaskStatus::Completed,
        &fragments(&[r#"{"query":"(objectClass=user)","count":2,"entries":[
            {"dn":"CN=a","sAMAccountName":"a","whenCreated":"2024"},
            {"dn":"CN=b","memberOf":"\"CN=Admins\""}
        ]}"#]),
    );
    let reversed = render(
        "ldap_query",
        TaskStatus::Completed,
        &fragments(&[r#"{"query":"(objectClass=user)","count":2,"entries":[
            {"dn":"CN=b","memberOf":"\"CN=Admins\""},
            {"dn":"CN=a","sAMAccountName":"a","whenCreated":"2024"}
        ]}"#]),
    );

    let keys = |out: &RenderedOutput| -> Vec<String> {
        table(out)[0].headers.iter().map(|h| h.key.clone()).collect()
    };
    assert_eq!(
        keys(&forward),
        ["dn", "sAMAccountName", "memberOf", "whenCreated"],
        "priority attributes lead, remainder is lexicographic"
    );
    assert_eq!(keys(&forward), keys(&reversed), "record order must not matter");

    assert_eq!(table(&forward)[0].title, "(objectClass=user) — 2 result(s)");

    // wrapping quotes stripped from encoded nested values
    let row_b = table(&forward)[0]
        .rows
        .iter()
        .find(|row| row.cells["dn"].plaintext == "CN=b")
        .expect("row for CN=b");
    assert_eq!(row_b.cells["memberOf"].plaintext, "CN=Admins");
}

// ---------------------------------------------------------------------------
// handles / netenum / stealtoken: multi-block composition
// ---------------------------------------------------------------------------

#[test]
fn handles_emits_summary_before_details_and_formats_hex() {
    let out = render(
        "handles",
        TaskStatus::Completed,
        &fragments(&[r#"{"pid":624,"total":210,"shown":2,
            "summary":[{"type":"File","count":120},{"type":"Key","count":90}],
            "handles":[{"handle":4066,"type":"File","name":"C:\\pagefile.sys"},
                       {"handle":12,"type":"Mutant","name":""}]}"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks.len(), 2, "summary block then detail block");
    assert_eq!(blocks[0].title, "Handle Type Summary (PID 624: 2 of 210 handles)");
    assert_eq!(blocks[1].title, "Handle Details (2 shown)");
    assert_eq!(blocks[1].rows[0].cells["handle"].plaintext, "0x0FE2");
    assert_eq!(blocks[1].rows[1].cells["name"].plaintext, "(unnamed)");
}

#[test]
fn handles_zero_shown_falls_back_to_total() {
    let out = render(
        "handles",
        TaskStatus::Completed,
        &fragments(&[r#"{"pid":624,"total":2,"shown":0,
            "summary":[{"type":"File","count":2}],
            "handles":[{"handle":4,"type":"File","name":"a"},
                       {"handle":8,"type":"File","name":"b"}]}"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "Handle Type Summary (PID 624: 2 of 2 handles)");
}

#[test]
fn netenum_domain_info_skips_empty_fields_and_optional_trusts() {
    let out = render(
        "netenum",
        TaskStatus::Completed,
        &fragments(&[r#"{"dc_name":"DC01","domain":"corp.local","forest":"",
            "min_password_length":8,"force_logoff":0,"trusts":[]}"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks.len(), 1, "empty trusts list emits no block");
    assert_eq!(blocks[0].title, "Domain Info");
    let fields: Vec<&str> = blocks[0]
        .rows
        .iter()
        .map(|row| row.cells["field"].plaintext.as_str())
        .collect();
    assert_eq!(
        fields,
        ["DC Name", "Domain", "Min Password Length"],
        "absent, empty, and zero values are skipped"
    );
}

#[test]
fn netenum_flat_entries_render_as_single_table() {
    let out = render(
        "netenum",
        TaskStatus::Completed,
        &fragments(&[r#"[{"name":"FS01","type":"server","comment":"","source":"browser"}]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].title, "Net Enum (1 entries)");
}

#[test]
fn stealtoken_emits_info_block_then_privileges_with_enabled_count() {
    let out = render(
        "stealtoken",
        TaskStatus::Completed,
        &fragments(&[r#"{"identity":"CORP\\admin","source":"explorer.exe","integrity":"High",
            "privileges":[
                {"name":"SeDebugPrivilege","status":"Enabled","description":"Debug programs"},
                {"name":"SeShutdownPrivilege","status":"Disabled","description":"Shut down"}
            ]}"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].title, "Token Info");
    assert_eq!(blocks[1].title, "Token Privileges (1/2 enabled)");
    assert_eq!(blocks[0].rows[0].cells["field"].plaintext, "Identity");
    assert_eq!(blocks[0].rows[0].cells["value"].plaintext, "CORP\\admin");
}

// ---------------------------------------------------------------------------
// style precedence
// ---------------------------------------------------------------------------

#[test]
fn getprivs_disabled_state_overrides_dangerous_name_tint() {
    let out = render(
        "getprivs",
        TaskStatus::Completed,
        &fragments(&[r#"[
            {"name":"SeDebugPrivilege","status":"Disabled","description":""},
            {"name":"SeDebugPrivilege","status":"Enabled","description":""}
        ]"#]),
    );
    let blocks = table(&out);
    let tint_of = |i: usize| {
        blocks[0].rows[i]
            .style
            .as_ref()
            .and_then(|s| s.background_color.as_deref())
            .map(str::to_string)
    };
    assert_eq!(
        tint_of(0),
        Some("rgba(128,128,128,0.15)".to_string()),
        "disabled beats the dangerous-name risk tint"
    );
    assert_eq!(
        tint_of(1),
        Some("rgba(255,165,0,0.15)".to_string()),
        "enabled dangerous privilege keeps the risk tint"
    );
    assert_eq!(blocks[0].title, "Token Privileges (1/2 enabled)");
}

// ---------------------------------------------------------------------------
// assorted single-variant commands
// ---------------------------------------------------------------------------

#[test]
fn ls_listing_and_permissions_variants_disambiguate() {
    let listing = render(
        "ls",
        TaskStatus::Completed,
        &fragments(&[r#"{"path":"C:\\Users","entries":[
            {"name":"admin","type":"dir","size":0,"modified":"2025-01-01"}
        ]}"#]),
    );
    assert!(table(&listing)[0].title.starts_with("Directory Listing — C:\\Users"));

    let perms = render(
        "ls",
        TaskStatus::Completed,
        &fragments(&[r#"{"path":"C:\\secrets.txt","owner":"CORP\\admin","acl":[
            {"principal":"Everyone","rights":"FullControl","inherited":false}
        ]}"#]),
    );
    let blocks = table(&perms);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].title, "File Permissions");
    assert_eq!(blocks[1].title, "ACL Entries (1)");
}

#[test]
fn portscan_title_counts_open_ports() {
    let out = render(
        "portscan",
        TaskStatus::Completed,
        &fragments(&[r#"[
            {"host":"10.0.0.5","port":445,"service":"smb","state":"open"},
            {"host":"10.0.0.5","port":3389,"service":"rdp","state":"closed"}
        ]"#]),
    );
    assert_eq!(table(&out)[0].title, "Port Scan — 1/2 open");
}

#[test]
fn triage_minority_category_gets_info_tint_but_severity_wins() {
    let out = render(
        "triage",
        TaskStatus::Completed,
        &fragments(&[r#"[
            {"severity":"low","category":"persistence","finding":"run key"},
            {"severity":"low","category":"persistence","finding":"startup folder"},
            {"severity":"critical","category":"credential","finding":"cleartext password"}
        ]"#]),
    );
    let blocks = table(&out);
    assert_eq!(
        blocks[0].rows[2]
            .style
            .as_ref()
            .and_then(|s| s.background_color.as_deref()),
        Some("rgba(255,0,0,0.15)"),
        "critical severity outranks the minority-category tint"
    );
    assert!(blocks[0].rows[0].style.is_none(), "majority low rows stay neutral");
}

#[test]
fn kerb_delegation_joins_target_lists() {
    let out = render(
        "kerb_delegation",
        TaskStatus::Completed,
        &fragments(&[r#"[{"account":"WEB01$","type":"constrained",
            "targets":["cifs/dc01","ldap/dc01"]}]"#]),
    );
    let blocks = table(&out);
    assert_eq!(blocks[0].rows[0].cells["targets"].plaintext, "cifs/dc01, ldap/dc01");
    assert_eq!(blocks[0].title, "Kerberos Delegation — 1 accounts (0 unconstrained)");
}
