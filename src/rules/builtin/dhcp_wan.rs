use crate::model::{zone_matches, zones, ParsedConfig};
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// DHCP_ON_WAN: an interface in the WAN zone runs a DHCP server.
///
/// Serving leases toward the provider side hands out addresses to whatever
/// is upstream. One finding per offending interface.
pub struct DhcpOnWanCheck;

impl RiskCheck for DhcpOnWanCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::DhcpOnWan;
        CheckMetadata {
            risk_type,
            name: "DHCP server on WAN".into(),
            description: "A WAN-zone interface is running a DHCP server".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .interfaces
            .iter()
            .filter(|iface| zone_matches(&iface.zone, zones::WAN) && iface.dhcp_server_enabled)
            .map(|iface| {
                RiskFinding::new(
                    RiskType::DhcpOnWan,
                    format!(
                        "Interface '{}' is in the WAN zone with its DHCP server enabled",
                        iface.name
                    ),
                    Some(Evidence::named(iface.name.clone())),
                )
            })
            .collect()
    }
}
