use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// Vendor-default administrative account names, compared case-insensitively
/// against configured usernames.
const DEFAULT_ADMIN_USERNAMES: &[&str] = &["admin", "root", "administrator"];

/// ADMIN_NO_MFA: administrative logins do not require a second factor.
///
/// Fires whenever the MFA flag is off, including on exports that configure
/// no admin accounts at all: the device always has at least its built-in
/// account, so an export silent on MFA still describes unprotected access.
pub struct AdminNoMfaCheck;

impl RiskCheck for AdminNoMfaCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::AdminNoMfa;
        CheckMetadata {
            risk_type,
            name: "Admin MFA not enforced".into(),
            description: "Administrative access does not require multi-factor authentication"
                .into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        if config.admin_settings.mfa_enabled {
            return Vec::new();
        }
        vec![RiskFinding::new(
            RiskType::AdminNoMfa,
            "Multi-factor authentication is not required for administrative access",
            Some(Evidence::named("mfa")),
        )]
    }
}

/// DEFAULT_ADMIN_USERNAME: a well-known account name is configured.
///
/// One finding per matching username, so `admin` plus `root` reports twice.
pub struct DefaultAdminUsernameCheck;

impl RiskCheck for DefaultAdminUsernameCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::DefaultAdminUsername;
        CheckMetadata {
            risk_type,
            name: "Default admin username".into(),
            description: "An administrative account uses a vendor-default name".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .admin_settings
            .usernames
            .iter()
            .filter(|name| {
                DEFAULT_ADMIN_USERNAMES
                    .iter()
                    .any(|default| name.eq_ignore_ascii_case(default))
            })
            .map(|name| {
                RiskFinding::new(
                    RiskType::DefaultAdminUsername,
                    format!("Administrative account '{name}' uses a vendor-default name"),
                    Some(Evidence::named(name.clone())),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn mfa_check_fires_by_default_and_clears_on_enable() {
        assert_eq!(AdminNoMfaCheck.run(&ParsedConfig::default()).len(), 1);
        assert!(AdminNoMfaCheck.run(&parse("mfa enable")).is_empty());
    }

    #[test]
    fn default_usernames_match_case_insensitively() {
        let config = parse("admin username Admin\nadmin username ROOT");
        let findings = DefaultAdminUsernameCheck.run(&config);
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn custom_usernames_pass() {
        let config = parse("admin username secops\nadmin username fw-admin-2");
        assert!(DefaultAdminUsernameCheck.run(&config).is_empty());
    }

    #[test]
    fn duplicate_username_lines_collapse_to_one_finding() {
        let config = parse("admin username admin\nadmin username admin");
        assert_eq!(DefaultAdminUsernameCheck.run(&config).len(), 1);
    }

    #[test]
    fn no_usernames_means_no_default_name_findings() {
        assert!(DefaultAdminUsernameCheck
            .run(&ParsedConfig::default())
            .is_empty());
    }
}
