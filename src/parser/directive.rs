//! Directive classification.
//!
//! Every known line shape in the export format has a tagged variant here and
//! one extraction function. Classification is a closed match over the
//! leading keyword (plus a secondary keyword where the first is ambiguous,
//! e.g. `vpn policy` vs a bare `vpn`), so adding a directive kind cannot
//! silently misclassify an existing one.

use crate::model::{
    AccessRule, NamedObject, NetworkInterface, RuleAction, VpnConfig,
    DEFAULT_DHCP_SERVER_ENABLED,
};

/// One recognized configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    AccessRule(AccessRule),
    Interface(NetworkInterface),
    VpnPolicy(VpnConfig),
    NatPolicy(NamedObject),
    AddressObject(NamedObject),
    ServiceObject(NamedObject),
    Service {
        service: SecurityService,
        enabled: bool,
    },
    AdminUsername(String),
    Mfa(bool),
    WanManagement(bool),
    HttpsAdminPort(u16),
    Ssh(bool),
    NtpServer(String),
    Hostname(String),
    FirmwareVersion(String),
}

/// Which security-service toggle a `<service> enable|disable` line targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityService {
    Ips,
    GatewayAv,
    DpiSsl,
    Atp,
    AppControl,
    ContentFilter,
    BotnetFilter,
}

/// Classify a tokenized line. `None` means the line is not a well-formed
/// known directive: either the keyword is unknown or a recognized keyword is
/// missing arguments. Both degrade to "ignored", never to an error or a
/// partially-filled record.
pub fn classify(tokens: &[String], source_line: usize) -> Option<Directive> {
    let toks: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match toks.as_slice() {
        ["access-rule", rest @ ..] => access_rule(rest, source_line),
        ["interface", rest @ ..] => interface(rest),
        ["vpn", "policy", rest @ ..] => vpn_policy(rest),
        ["nat", "policy", rest @ ..] => named_object(rest).map(Directive::NatPolicy),
        ["address-object", rest @ ..] => named_object(rest).map(Directive::AddressObject),
        ["service-object", rest @ ..] => named_object(rest).map(Directive::ServiceObject),
        ["ips", st, ..] => service(SecurityService::Ips, st),
        ["gateway-av", st, ..] => service(SecurityService::GatewayAv, st),
        ["dpi-ssl", st, ..] => service(SecurityService::DpiSsl, st),
        ["atp", st, ..] => service(SecurityService::Atp, st),
        ["app-control", st, ..] => service(SecurityService::AppControl, st),
        ["content-filter", st, ..] => service(SecurityService::ContentFilter, st),
        ["botnet-filter", st, ..] => service(SecurityService::BotnetFilter, st),
        ["admin", "username", name, ..] => Some(Directive::AdminUsername((*name).to_string())),
        ["mfa", st, ..] => state(st).map(Directive::Mfa),
        ["wan", "management", st, ..] => state(st).map(Directive::WanManagement),
        ["https", "admin-port", port, ..] => {
            port.parse::<u16>().ok().map(Directive::HttpsAdminPort)
        }
        ["ssh", st, ..] => state(st).map(Directive::Ssh),
        ["ntp", "server", addr, ..] => Some(Directive::NtpServer((*addr).to_string())),
        ["hostname", name, ..] => Some(Directive::Hostname((*name).to_string())),
        ["firmware", "version", version, ..] => {
            Some(Directive::FirmwareVersion((*version).to_string()))
        }
        _ => None,
    }
}

// access-rule from <Z1> to <Z2> source <S> destination <D> service <SV>
//             action <allow|deny> [description <text...>]
fn access_rule(toks: &[&str], source_line: usize) -> Option<Directive> {
    match toks {
        ["from", from_zone, "to", to_zone, "source", source, "destination", destination, "service", service, "action", action, rest @ ..] =>
        {
            let action = RuleAction::from_token(action)?;
            // Trailing tokens other than a description clause are ignored,
            // not fatal: exports append fields this version does not model.
            let description = match rest {
                ["description", text @ ..] if !text.is_empty() => Some(text.join(" ")),
                _ => None,
            };
            Some(Directive::AccessRule(AccessRule {
                from_zone: (*from_zone).to_string(),
                to_zone: (*to_zone).to_string(),
                source: (*source).to_string(),
                destination: (*destination).to_string(),
                service: (*service).to_string(),
                action,
                description,
                source_line,
            }))
        }
        _ => None,
    }
}

// interface <name> zone <Z> [ip <addr>] [dhcp-server <enable|disable>]
fn interface(toks: &[&str]) -> Option<Directive> {
    match toks {
        [name, "zone", zone, opts @ ..] => {
            let mut ip_address = None;
            let mut dhcp_server_enabled = DEFAULT_DHCP_SERVER_ENABLED;
            let mut opts = opts;
            while let [key, value, rest @ ..] = opts {
                match *key {
                    "ip" => ip_address = Some((*value).to_string()),
                    "dhcp-server" => dhcp_server_enabled = state(value)?,
                    _ => {}
                }
                opts = rest;
            }
            Some(Directive::Interface(NetworkInterface {
                name: (*name).to_string(),
                zone: (*zone).to_string(),
                ip_address,
                dhcp_server_enabled,
            }))
        }
        _ => None,
    }
}

// vpn policy <name> encryption <alg> authentication <method>
fn vpn_policy(toks: &[&str]) -> Option<Directive> {
    match toks {
        [name, "encryption", encryption, "authentication", authentication, ..] => {
            Some(Directive::VpnPolicy(VpnConfig {
                name: (*name).to_string(),
                encryption: (*encryption).to_string(),
                authentication: (*authentication).to_string(),
            }))
        }
        _ => None,
    }
}

// <name> <value...> for the lightly-typed object directives.
fn named_object(toks: &[&str]) -> Option<NamedObject> {
    match toks {
        [name, value @ ..] if !value.is_empty() => Some(NamedObject {
            name: (*name).to_string(),
            value: value.join(" "),
        }),
        _ => None,
    }
}

fn service(service: SecurityService, state_token: &str) -> Option<Directive> {
    state(state_token).map(|enabled| Directive::Service { service, enabled })
}

fn state(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("enable") {
        Some(true)
    } else if token.eq_ignore_ascii_case("disable") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_line(line: &str) -> Option<Directive> {
        classify(&crate::parser::tokenizer::tokenize(line), 7)
    }

    #[test]
    fn access_rule_full_shape() {
        let directive = classify_line(
            "access-rule from WAN to LAN source any destination any service any action allow",
        )
        .unwrap();
        let Directive::AccessRule(rule) = directive else {
            panic!("expected access rule");
        };
        assert_eq!(rule.from_zone, "WAN");
        assert_eq!(rule.to_zone, "LAN");
        assert_eq!(rule.action, RuleAction::Allow);
        assert_eq!(rule.description, None);
        assert_eq!(rule.source_line, 7);
    }

    #[test]
    fn access_rule_with_quoted_description() {
        let directive = classify_line(
            r#"access-rule from LAN to WAN source lan-net destination any service http action allow description "outbound web""#,
        )
        .unwrap();
        let Directive::AccessRule(rule) = directive else {
            panic!("expected access rule");
        };
        assert_eq!(rule.description.as_deref(), Some("outbound web"));
    }

    #[test]
    fn access_rule_with_bare_description_words() {
        let directive = classify_line(
            "access-rule from LAN to WAN source any destination any service any action deny description block all",
        )
        .unwrap();
        let Directive::AccessRule(rule) = directive else {
            panic!("expected access rule");
        };
        assert_eq!(rule.description.as_deref(), Some("block all"));
        assert_eq!(rule.action, RuleAction::Deny);
    }

    #[test]
    fn access_rule_missing_fields_is_dropped() {
        assert_eq!(classify_line("access-rule from WAN to LAN"), None);
        assert_eq!(
            classify_line("access-rule from WAN to LAN source any destination any service any"),
            None
        );
    }

    #[test]
    fn access_rule_unknown_action_is_dropped() {
        assert_eq!(
            classify_line(
                "access-rule from WAN to LAN source any destination any service any action permit"
            ),
            None
        );
    }

    #[test]
    fn interface_minimal_and_optional_parts() {
        let minimal = classify_line("interface X1 zone WAN").unwrap();
        let Directive::Interface(iface) = minimal else {
            panic!("expected interface");
        };
        assert_eq!(iface.name, "X1");
        assert_eq!(iface.ip_address, None);
        assert!(!iface.dhcp_server_enabled);

        let full =
            classify_line("interface X0 zone LAN ip 10.0.0.1 dhcp-server enable").unwrap();
        let Directive::Interface(iface) = full else {
            panic!("expected interface");
        };
        assert_eq!(iface.ip_address.as_deref(), Some("10.0.0.1"));
        assert!(iface.dhcp_server_enabled);
    }

    #[test]
    fn interface_bad_dhcp_state_is_dropped() {
        assert_eq!(
            classify_line("interface X1 zone WAN dhcp-server maybe"),
            None
        );
    }

    #[test]
    fn vpn_policy_requires_both_keywords() {
        let directive =
            classify_line("vpn policy branch encryption aes-256 authentication sha256").unwrap();
        let Directive::VpnPolicy(vpn) = directive else {
            panic!("expected vpn policy");
        };
        assert_eq!(vpn.name, "branch");
        assert_eq!(vpn.encryption, "aes-256");
        assert_eq!(vpn.authentication, "sha256");

        assert_eq!(classify_line("vpn policy branch encryption aes-256"), None);
        // a bare `vpn` line is not a directive at all
        assert_eq!(classify_line("vpn branch"), None);
    }

    #[test]
    fn object_directives_join_their_value() {
        let directive = classify_line("address-object web-srv 10.0.0.80 host").unwrap();
        assert_eq!(
            directive,
            Directive::AddressObject(NamedObject {
                name: "web-srv".into(),
                value: "10.0.0.80 host".into(),
            })
        );
        assert_eq!(classify_line("address-object lonely"), None);
    }

    #[test]
    fn service_toggles_parse_state() {
        assert_eq!(
            classify_line("ips enable"),
            Some(Directive::Service {
                service: SecurityService::Ips,
                enabled: true
            })
        );
        assert_eq!(
            classify_line("botnet-filter disable"),
            Some(Directive::Service {
                service: SecurityService::BotnetFilter,
                enabled: false
            })
        );
        assert_eq!(classify_line("ips on"), None);
        assert_eq!(classify_line("ips"), None);
    }

    #[test]
    fn scalar_directives() {
        assert_eq!(
            classify_line("hostname edge-fw-01"),
            Some(Directive::Hostname("edge-fw-01".into()))
        );
        assert_eq!(
            classify_line("firmware version 7.0.1-5050"),
            Some(Directive::FirmwareVersion("7.0.1-5050".into()))
        );
        assert_eq!(
            classify_line("https admin-port 8443"),
            Some(Directive::HttpsAdminPort(8443))
        );
        assert_eq!(classify_line("https admin-port lots"), None);
        assert_eq!(
            classify_line("ntp server 129.6.15.28"),
            Some(Directive::NtpServer("129.6.15.28".into()))
        );
        assert_eq!(
            classify_line("admin username secops"),
            Some(Directive::AdminUsername("secops".into()))
        );
        assert_eq!(
            classify_line("wan management enable"),
            Some(Directive::WanManagement(true))
        );
        assert_eq!(classify_line("wan enable"), None);
    }

    #[test]
    fn unknown_keyword_is_not_classified() {
        assert_eq!(classify_line("bgp neighbor 192.0.2.1"), None);
        assert_eq!(classify_line("garbage"), None);
    }
}
