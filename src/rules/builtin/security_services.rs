use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// IPS_DISABLED: intrusion prevention switched off.
///
/// The flag defaults to disabled, so this fires on exports that never
/// mention IPS at all. Absence of the directive is treated as absence of
/// the protection.
pub struct IpsDisabledCheck;

impl RiskCheck for IpsDisabledCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::IpsDisabled;
        CheckMetadata {
            risk_type,
            name: "IPS disabled".into(),
            description: "The intrusion prevention service is not enabled".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        if config.security_services.ips {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::IpsDisabled,
            "The intrusion prevention service is disabled, so known exploit \
             signatures pass uninspected",
            Some(Evidence::named("ips")),
        )]
    }
}

/// GAV_DISABLED: gateway anti-virus switched off. Same absence-means-off
/// treatment as the IPS check.
pub struct GavDisabledCheck;

impl RiskCheck for GavDisabledCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::GavDisabled;
        CheckMetadata {
            risk_type,
            name: "Gateway anti-virus disabled".into(),
            description: "Gateway anti-virus scanning is not enabled".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        if config.security_services.gateway_av {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::GavDisabled,
            "Gateway anti-virus is disabled, so malware in transit is not scanned",
            Some(Evidence::named("gateway-av")),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn both_fire_on_an_empty_export() {
        let config = ParsedConfig::default();
        assert_eq!(IpsDisabledCheck.run(&config).len(), 1);
        assert_eq!(GavDisabledCheck.run(&config).len(), 1);
    }

    #[test]
    fn explicit_disable_also_fires() {
        let config = parse("ips disable\ngateway-av disable");
        assert_eq!(IpsDisabledCheck.run(&config).len(), 1);
        assert_eq!(GavDisabledCheck.run(&config).len(), 1);
    }

    #[test]
    fn enabling_silences_each_independently() {
        let config = parse("ips enable");
        assert!(IpsDisabledCheck.run(&config).is_empty());
        assert_eq!(GavDisabledCheck.run(&config).len(), 1);

        let config = parse("ips enable\ngateway-av enable");
        assert!(IpsDisabledCheck.run(&config).is_empty());
        assert!(GavDisabledCheck.run(&config).is_empty());
    }

    #[test]
    fn last_toggle_wins() {
        let config = parse("ips enable\nips disable");
        assert_eq!(IpsDisabledCheck.run(&config).len(), 1);
    }
}
