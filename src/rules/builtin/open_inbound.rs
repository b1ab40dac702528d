use crate::model::{is_any, zone_matches, zones, ParsedConfig, RuleAction};
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// OPEN_INBOUND: unrestricted allow rule from WAN into LAN.
///
/// Matches only the fully-open shape: WAN to LAN with source, destination,
/// and service all `any`, action allow. One finding per matching rule, so a
/// duplicated rule is reported (and scored) twice.
pub struct OpenInboundCheck;

impl RiskCheck for OpenInboundCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::OpenInbound;
        CheckMetadata {
            risk_type,
            name: "Open inbound rule".into(),
            description: "A rule allows all WAN traffic into the LAN unrestricted".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .access_rules
            .iter()
            .filter(|rule| {
                rule.action == RuleAction::Allow
                    && zone_matches(&rule.from_zone, zones::WAN)
                    && zone_matches(&rule.to_zone, zones::LAN)
                    && is_any(&rule.source)
                    && is_any(&rule.destination)
                    && is_any(&rule.service)
            })
            .map(|rule| {
                RiskFinding::new(
                    RiskType::OpenInbound,
                    format!(
                        "Rule at line {} allows all WAN traffic into the LAN with no \
                         source, destination, or service restriction",
                        rule.source_line
                    ),
                    Some(Evidence::at_line(rule.summary(), rule.source_line)),
                )
            })
            .collect()
    }
}
