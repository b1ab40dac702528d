mod admin_access;
mod any_any_rule;
mod dhcp_wan;
mod guest_isolation;
mod ntp;
mod open_inbound;
mod rule_hygiene;
mod security_services;
mod vpn_encryption;
mod wan_management;

use super::RiskCheck;

/// The full built-in catalog, in catalog order. `analyze` emits findings in
/// this order, so reordering here changes output ordering for every caller.
pub fn all_checks() -> Vec<Box<dyn RiskCheck>> {
    vec![
        Box::new(wan_management::WanManagementCheck),
        Box::new(open_inbound::OpenInboundCheck),
        Box::new(any_any_rule::AnyAnyRuleCheck),
        Box::new(security_services::IpsDisabledCheck),
        Box::new(security_services::GavDisabledCheck),
        Box::new(admin_access::AdminNoMfaCheck),
        Box::new(admin_access::DefaultAdminUsernameCheck),
        Box::new(vpn_encryption::VpnWeakEncryptionCheck),
        Box::new(ntp::NoNtpCheck),
        Box::new(dhcp_wan::DhcpOnWanCheck),
        Box::new(guest_isolation::GuestNotIsolatedCheck),
        Box::new(rule_hygiene::RuleNoDescriptionCheck),
    ]
}
