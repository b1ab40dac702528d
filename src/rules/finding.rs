use serde::{Deserialize, Serialize};

/// A detected misconfiguration, produced by one catalog check.
///
/// Findings are value objects: created fresh per `analyze` call, never
/// mutated, carrying no identity. Persistence layers attach device/snapshot
/// identity externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    /// Fixed catalog type, one constant per check.
    pub risk_type: RiskType,
    /// Category, always derived from `risk_type`.
    pub category: RiskCategory,
    /// Severity. Starts at the catalog default; a policy override may
    /// adjust it before reporting.
    pub severity: Severity,
    /// Human-readable description of this occurrence.
    pub description: String,
    /// Static remediation guidance keyed by `risk_type`. Never interpolates
    /// configuration values, so output stays deterministic.
    pub remediation: String,
    /// What in the input triggered the finding (rule line, interface name,
    /// username), for traceability.
    pub evidence: Option<Evidence>,
}

impl RiskFinding {
    /// Build a finding with category, severity, and remediation taken from
    /// the fixed catalog tables for `risk_type`.
    pub fn new(
        risk_type: RiskType,
        description: impl Into<String>,
        evidence: Option<Evidence>,
    ) -> Self {
        Self {
            risk_type,
            category: risk_type.category(),
            severity: risk_type.default_severity(),
            description: description.into(),
            remediation: risk_type.remediation().to_string(),
            evidence,
        }
    }
}

/// Reference back into the audited configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// The offending token: a rule summary, interface name, username, ...
    pub reference: String,
    /// 1-based source line where the offending directive appeared, when the
    /// trigger is a specific line.
    pub line: Option<usize>,
}

impl Evidence {
    pub fn at_line(reference: impl Into<String>, line: usize) -> Self {
        Self {
            reference: reference.into(),
            line: Some(line),
        }
    }

    pub fn named(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            line: None,
        }
    }
}

/// One variant per catalog check. The serialized form matches the wire
/// constants consumers key remediation docs on (`WAN_MANAGEMENT_ENABLED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    WanManagementEnabled,
    OpenInbound,
    AnyAnyRule,
    IpsDisabled,
    GavDisabled,
    AdminNoMfa,
    DefaultAdminUsername,
    VpnWeakEncryption,
    NoNtp,
    DhcpOnWan,
    GuestNotIsolated,
    RuleNoDescription,
}

impl RiskType {
    /// Fixed category per type.
    pub const fn category(self) -> RiskCategory {
        match self {
            Self::WanManagementEnabled | Self::OpenInbound => RiskCategory::ExposureRisk,
            Self::AnyAnyRule
            | Self::VpnWeakEncryption
            | Self::DhcpOnWan
            | Self::GuestNotIsolated => RiskCategory::NetworkMisconfiguration,
            Self::IpsDisabled | Self::GavDisabled | Self::AdminNoMfa => {
                RiskCategory::SecurityFeatureDisabled
            }
            Self::DefaultAdminUsername | Self::NoNtp | Self::RuleNoDescription => {
                RiskCategory::BestPracticeViolation
            }
        }
    }

    /// Fixed default severity per type.
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::WanManagementEnabled
            | Self::OpenInbound
            | Self::IpsDisabled
            | Self::GavDisabled
            | Self::DhcpOnWan => Severity::Critical,
            Self::AnyAnyRule
            | Self::AdminNoMfa
            | Self::VpnWeakEncryption
            | Self::GuestNotIsolated => Severity::High,
            Self::DefaultAdminUsername => Severity::Medium,
            Self::NoNtp | Self::RuleNoDescription => Severity::Low,
        }
    }

    /// Static remediation text per type.
    pub const fn remediation(self) -> &'static str {
        match self {
            Self::WanManagementEnabled => {
                "Disable management access on the WAN zone; administer the device \
                 from an internal management network or over VPN."
            }
            Self::OpenInbound => {
                "Remove or narrow the WAN-to-LAN allow rule: restrict source, \
                 destination, and service to the minimum the published service needs."
            }
            Self::AnyAnyRule => {
                "Replace the any-to-any rule with zone-specific rules so every flow \
                 is explicitly intended."
            }
            Self::IpsDisabled => {
                "Enable the intrusion prevention service and apply its signature \
                 updates."
            }
            Self::GavDisabled => "Enable gateway anti-virus scanning on perimeter zones.",
            Self::AdminNoMfa => {
                "Require multi-factor authentication for all administrative accounts."
            }
            Self::DefaultAdminUsername => {
                "Rename vendor-default administrative accounts; defaults are the \
                 first usernames tried in credential-stuffing attacks."
            }
            Self::VpnWeakEncryption => {
                "Reconfigure the VPN policy to AES-128 or stronger; DES and 3DES \
                 are breakable and 'none' sends traffic in the clear."
            }
            Self::NoNtp => {
                "Configure at least one reachable NTP server so log timestamps are \
                 trustworthy during incident response."
            }
            Self::DhcpOnWan => {
                "Disable the DHCP server on WAN-facing interfaces; serving leases \
                 toward the ISP side invites rogue-client and spoofing problems."
            }
            Self::GuestNotIsolated => {
                "Add a deny rule from the guest zone to internal zones so guest \
                 clients cannot reach LAN or DMZ resources."
            }
            Self::RuleNoDescription => {
                "Document the intent of each access rule in its description field \
                 so reviews can tell deliberate policy from leftovers."
            }
        }
    }
}

impl std::fmt::Display for RiskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WanManagementEnabled => "WAN_MANAGEMENT_ENABLED",
            Self::OpenInbound => "OPEN_INBOUND",
            Self::AnyAnyRule => "ANY_ANY_RULE",
            Self::IpsDisabled => "IPS_DISABLED",
            Self::GavDisabled => "GAV_DISABLED",
            Self::AdminNoMfa => "ADMIN_NO_MFA",
            Self::DefaultAdminUsername => "DEFAULT_ADMIN_USERNAME",
            Self::VpnWeakEncryption => "VPN_WEAK_ENCRYPTION",
            Self::NoNtp => "NO_NTP",
            Self::DhcpOnWan => "DHCP_ON_WAN",
            Self::GuestNotIsolated => "GUEST_NOT_ISOLATED",
            Self::RuleNoDescription => "RULE_NO_DESCRIPTION",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    NetworkMisconfiguration,
    ExposureRisk,
    SecurityFeatureDisabled,
    BestPracticeViolation,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkMisconfiguration => write!(f, "Network Misconfiguration"),
            Self::ExposureRisk => write!(f, "Exposure Risk"),
            Self::SecurityFeatureDisabled => write!(f, "Security Feature Disabled"),
            Self::BestPracticeViolation => write!(f, "Best Practice Violation"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Points deducted from the 100-point baseline per finding.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Critical => 25,
            Self::High => 15,
            Self::Medium => 5,
            Self::Low => 1,
        }
    }

    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" | "crit" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Metadata about a catalog check, for `list-checks` and the SARIF rule
/// table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckMetadata {
    pub risk_type: RiskType,
    pub name: String,
    pub description: String,
    pub default_severity: Severity,
    pub category: RiskCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn weights_match_the_scoring_table() {
        assert_eq!(Severity::Critical.weight(), 25);
        assert_eq!(Severity::High.weight(), 15);
        assert_eq!(Severity::Medium.weight(), 5);
        assert_eq!(Severity::Low.weight(), 1);
    }

    #[test]
    fn new_finding_fills_catalog_columns() {
        let finding = RiskFinding::new(RiskType::OpenInbound, "wide open", None);
        assert_eq!(finding.category, RiskCategory::ExposureRisk);
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.remediation, RiskType::OpenInbound.remediation());
    }

    #[test]
    fn risk_type_serializes_to_wire_constants() {
        let json = serde_json::to_string(&RiskType::WanManagementEnabled).unwrap();
        assert_eq!(json, "\"WAN_MANAGEMENT_ENABLED\"");
        let json = serde_json::to_string(&RiskType::RuleNoDescription).unwrap();
        assert_eq!(json, "\"RULE_NO_DESCRIPTION\"");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&RiskCategory::SecurityFeatureDisabled).unwrap();
        assert_eq!(json, "\"security_feature_disabled\"");
    }

    #[test]
    fn display_matches_serde_for_risk_type() {
        for risk_type in [
            RiskType::WanManagementEnabled,
            RiskType::OpenInbound,
            RiskType::AnyAnyRule,
            RiskType::IpsDisabled,
            RiskType::GavDisabled,
            RiskType::AdminNoMfa,
            RiskType::DefaultAdminUsername,
            RiskType::VpnWeakEncryption,
            RiskType::NoNtp,
            RiskType::DhcpOnWan,
            RiskType::GuestNotIsolated,
            RiskType::RuleNoDescription,
        ] {
            let wire = serde_json::to_string(&risk_type).unwrap();
            assert_eq!(wire.trim_matches('"'), risk_type.to_string());
        }
    }
}
