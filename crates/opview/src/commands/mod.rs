//! Per-command rendering descriptors.
//!
//! Each module is one instantiation of the generic pipeline: discriminator
//! probes, schema choice, style-rule table, and title functions — no
//! control flow of its own. `spec_for` builds the descriptor fresh per
//! render call; nothing is cached across invocations.

use crate::pipeline::CommandSpec;

pub mod arp;
pub mod asrep;
pub mod bits;
pub mod certstore;
pub mod cred_check;
pub mod enum_tokens;
pub mod generic;
pub mod getprivs;
pub mod handles;
pub mod kerb_delegation;
pub mod kerberoast;
pub mod klist;
pub mod ldap_query;
pub mod ls;
pub mod netenum;
pub mod netlocalgroup;
pub mod portscan;
pub mod prefetch;
pub mod ps;
pub mod regsearch;
pub mod schtask;
pub mod service;
pub mod smb;
pub mod spray;
pub mod stealtoken;
pub mod triage;

/// Descriptor lookup. Unknown commands get the generic passthrough spec.
pub fn spec_for(command: &str) -> CommandSpec {
    match command {
        "arp" => arp::spec(),
        "asrep" => asrep::spec(),
        "bits" => bits::spec(),
        "certstore" => certstore::spec(),
        "cred_check" => cred_check::spec(),
        "enum_tokens" => enum_tokens::spec(),
        "getprivs" => getprivs::spec(),
        "handles" => handles::spec(),
        "kerb_delegation" => kerb_delegation::spec(),
        "kerberoast" => kerberoast::spec(),
        "klist" => klist::spec(),
        "ldap_query" => ldap_query::spec(),
        "ls" => ls::spec(),
        "netenum" => netenum::spec(),
        "netlocalgroup" => netlocalgroup::spec(),
        "portscan" => portscan::spec(),
        "prefetch" => prefetch::spec(),
        "ps" => ps::spec(),
        "regsearch" => regsearch::spec(),
        "schtask" => schtask::spec(),
        "service" => service::spec(),
        "smb" => smb::spec(),
        "spray" => spray::spec(),
        "stealtoken" => stealtoken::spec(),
        "triage" => triage::spec(),
        _ => generic::spec(),
    }
}

/// Commands with a bespoke descriptor, for capability introspection.
pub const KNOWN_COMMANDS: &[&str] = &[
    "arp",
    "asrep",
    "bits",
    "certstore",
    "cred_check",
    "enum_tokens",
    "getprivs",
    "handles",
    "kerb_delegation",
    "kerberoast",
    "klist",
    "ldap_query",
    "ls",
    "netenum",
    "netlocalgroup",
    "portscan",
    "prefetch",
    "ps",
    "regsearch",
    "schtask",
    "service",
    "smb",
    "spray",
    "stealtoken",
    "triage",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_command_has_a_bespoke_spec() {
        for command in KNOWN_COMMANDS {
            let spec = spec_for(command);
            assert_eq!(&spec.name, command, "lookup must return the named descriptor");
            assert!(!spec.variants.is_empty(), "{} has no variants", command);
        }
    }

    #[test]
    fn test_unknown_command_gets_generic_spec() {
        assert_eq!(spec_for("definitely_not_a_command").name, "generic");
    }
}
