//! Shared configuration model.
//!
//! The parser produces a `ParsedConfig`. All risk checks consume a
//! `ParsedConfig`. This decouples the export grammar from security analysis.

pub mod access_rule;
pub mod network;
pub mod settings;

use serde::{Deserialize, Serialize};

pub use access_rule::{AccessRule, RuleAction};
pub use network::{NetworkInterface, VpnConfig, DEFAULT_DHCP_SERVER_ENABLED};
pub use settings::{AdminSettings, SecurityServices, SystemSettings};

/// Complete parsed configuration. Immutable once the parser returns it.
///
/// Every field has a well-defined default, so empty or unrecognized input
/// degrades to `ParsedConfig::default()` rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedConfig {
    /// Access rules in appearance order. Order matters for traceability
    /// (which rule triggered a finding), not for precedence.
    pub access_rules: Vec<AccessRule>,
    /// NAT policies, lightly typed. The catalog only counts these.
    pub nat_policies: Vec<NamedObject>,
    /// Address objects, lightly typed.
    pub address_objects: Vec<NamedObject>,
    /// Service objects, lightly typed.
    pub service_objects: Vec<NamedObject>,
    /// VPN policies.
    pub vpn_configs: Vec<VpnConfig>,
    /// Network interfaces.
    pub interfaces: Vec<NetworkInterface>,
    /// Security service toggles (IPS, gateway AV, ...).
    pub security_services: SecurityServices,
    /// Administrative access settings.
    pub admin_settings: AdminSettings,
    /// Hostname, firmware, NTP.
    pub system_settings: SystemSettings,
}

/// A name/value record for object types the catalog does not inspect deeply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedObject {
    pub name: String,
    pub value: String,
}

/// The wildcard token used by rules to mean "any zone/object/service".
pub const ANY_TOKEN: &str = "any";

/// Whether a free-form rule token is the wildcard. Comparison is
/// case-insensitive: exports vary between `any`, `Any`, and `ANY`.
pub fn is_any(token: &str) -> bool {
    token.eq_ignore_ascii_case(ANY_TOKEN)
}

/// Case-insensitive zone comparison. Zone tokens are free-form, but the
/// well-known names in [`zones`] carry meaning for the catalog.
pub fn zone_matches(token: &str, zone: &str) -> bool {
    token.eq_ignore_ascii_case(zone)
}

/// Well-known zone names.
pub mod zones {
    pub const WAN: &str = "WAN";
    pub const LAN: &str = "LAN";
    pub const GUEST: &str = "Guest";
    pub const DMZ: &str = "DMZ";
}
