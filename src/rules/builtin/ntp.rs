use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// Placeholder address some firmwares emit for "no NTP server configured".
/// An entry list consisting only of this sentinel counts as unconfigured.
const NTP_UNSET_SENTINEL: &str = "0.0.0.0";

/// NO_NTP: no usable time source.
///
/// Without trusted time sync, log timestamps cannot be correlated across
/// devices during incident response. Low severity but cheap to fix.
pub struct NoNtpCheck;

impl RiskCheck for NoNtpCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::NoNtp;
        CheckMetadata {
            risk_type,
            name: "No NTP server".into(),
            description: "No usable NTP server is configured".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        let servers = &config.system_settings.ntp_servers;
        let unconfigured = servers.iter().all(|s| s == NTP_UNSET_SENTINEL);
        if !unconfigured {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::NoNtp,
            "No NTP server is configured, so device timestamps drift and cannot \
             be trusted for log correlation",
            Some(Evidence::named("ntp server")),
        )]
    }
}
