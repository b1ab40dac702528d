use crate::model::{is_any, zone_matches, zones, ParsedConfig, RuleAction};
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// GUEST_NOT_ISOLATED: a guest zone exists but nothing blocks it from
/// internal zones.
///
/// The check requires a literal deny rule from the guest zone to an
/// internal zone (LAN, DMZ) or to `any`; rules that merely narrow guest
/// traffic do not count as isolation. Fires at most once per
/// configuration, anchored to the first guest interface, since isolation
/// is a property of the zone rather than of each interface in it.
pub struct GuestNotIsolatedCheck;

fn isolates_guest(config: &ParsedConfig) -> bool {
    config.access_rules.iter().any(|rule| {
        rule.action == RuleAction::Deny
            && zone_matches(&rule.from_zone, zones::GUEST)
            && (is_any(&rule.to_zone)
                || zone_matches(&rule.to_zone, zones::LAN)
                || zone_matches(&rule.to_zone, zones::DMZ))
    })
}

impl RiskCheck for GuestNotIsolatedCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::GuestNotIsolated;
        CheckMetadata {
            risk_type,
            name: "Guest zone not isolated".into(),
            description: "A guest zone exists without a deny rule toward internal zones".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        let guest_iface = config
            .interfaces
            .iter()
            .find(|iface| zone_matches(&iface.zone, zones::GUEST));
        let Some(iface) = guest_iface else {
            return Vec::new();
        };
        if isolates_guest(config) {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::GuestNotIsolated,
            format!(
                "Guest zone (interface '{}') has no deny rule blocking traffic \
                 toward internal zones",
                iface.name
            ),
            Some(Evidence::named(iface.name.clone())),
        )]
    }
}
