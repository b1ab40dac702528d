use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// WAN_MANAGEMENT_ENABLED: management interface reachable from the
/// internet.
///
/// Fires once when WAN-side management is switched on. Exposing the admin
/// plane to the WAN is the single most common path to full device
/// compromise, independent of how strong the admin credentials are.
pub struct WanManagementCheck;

impl RiskCheck for WanManagementCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::WanManagementEnabled;
        CheckMetadata {
            risk_type,
            name: "WAN management enabled".into(),
            description: "Device administration is reachable from the WAN zone".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        if !config.admin_settings.wan_management_enabled {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::WanManagementEnabled,
            "Management access is enabled on the WAN zone, exposing the admin \
             interface to the internet",
            Some(Evidence::named("wan management enable")),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn fires_when_wan_management_is_on() {
        let config = parse("wan management enable");
        let findings = WanManagementCheck.run(&config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].risk_type, RiskType::WanManagementEnabled);
    }

    #[test]
    fn silent_when_disabled_or_absent() {
        assert!(WanManagementCheck.run(&parse("wan management disable")).is_empty());
        assert!(WanManagementCheck.run(&ParsedConfig::default()).is_empty());
    }
}
