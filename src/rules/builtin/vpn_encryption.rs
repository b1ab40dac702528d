use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// Cipher tokens considered broken or absent. Matched case-insensitively
/// against `VpnConfig::encryption` exactly as written in the export;
/// `none` means the tunnel carries traffic in the clear.
const WEAK_VPN_CIPHERS: &[&str] = &["des", "3des", "none"];

/// VPN_WEAK_ENCRYPTION: a VPN policy uses a deny-listed cipher.
///
/// One finding per offending policy.
pub struct VpnWeakEncryptionCheck;

impl RiskCheck for VpnWeakEncryptionCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::VpnWeakEncryption;
        CheckMetadata {
            risk_type,
            name: "Weak VPN encryption".into(),
            description: "A VPN policy uses a broken or null cipher".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .vpn_configs
            .iter()
            .filter(|vpn| {
                WEAK_VPN_CIPHERS
                    .iter()
                    .any(|weak| vpn.encryption.eq_ignore_ascii_case(weak))
            })
            .map(|vpn| {
                RiskFinding::new(
                    RiskType::VpnWeakEncryption,
                    format!(
                        "VPN policy '{}' is configured with weak encryption '{}'",
                        vpn.name, vpn.encryption
                    ),
                    Some(Evidence::named(vpn.name.clone())),
                )
            })
            .collect()
    }
}
