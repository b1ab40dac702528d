//! Settings records with explicit secure-by-default-off constants.
//!
//! Absence of a directive never errors; it leaves the protection in the
//! state named below. The catalog relies on these exact defaults, so they
//! are spelled out as constants instead of hiding behind `derive(Default)`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A security service not mentioned in the export is disabled.
pub const DEFAULT_SERVICE_ENABLED: bool = false;
/// MFA is off unless an `mfa enable` directive appears.
pub const DEFAULT_MFA_ENABLED: bool = false;
/// Management from the WAN side is off unless explicitly enabled.
pub const DEFAULT_WAN_MANAGEMENT_ENABLED: bool = false;
/// SSH administration is off unless explicitly enabled.
pub const DEFAULT_SSH_ENABLED: bool = false;

/// Toggles for the licensed security services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityServices {
    /// Intrusion prevention.
    pub ips: bool,
    /// Gateway anti-virus.
    pub gateway_av: bool,
    /// TLS deep-packet inspection.
    pub dpi_ssl: bool,
    /// Advanced threat protection (sandboxing).
    pub atp: bool,
    /// Application control.
    pub app_control: bool,
    /// Content filter.
    pub content_filter: bool,
    /// Botnet command-and-control filter.
    pub botnet_filter: bool,
}

impl Default for SecurityServices {
    fn default() -> Self {
        Self {
            ips: DEFAULT_SERVICE_ENABLED,
            gateway_av: DEFAULT_SERVICE_ENABLED,
            dpi_ssl: DEFAULT_SERVICE_ENABLED,
            atp: DEFAULT_SERVICE_ENABLED,
            app_control: DEFAULT_SERVICE_ENABLED,
            content_filter: DEFAULT_SERVICE_ENABLED,
            botnet_filter: DEFAULT_SERVICE_ENABLED,
        }
    }
}

/// Administrative access settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// Configured admin usernames. Duplicates collapse; iteration order is
    /// deterministic so findings over usernames are stable.
    pub usernames: BTreeSet<String>,
    pub mfa_enabled: bool,
    pub wan_management_enabled: bool,
    pub https_admin_port: Option<u16>,
    pub ssh_enabled: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            usernames: BTreeSet::new(),
            mfa_enabled: DEFAULT_MFA_ENABLED,
            wan_management_enabled: DEFAULT_WAN_MANAGEMENT_ENABLED,
            https_admin_port: None,
            ssh_enabled: DEFAULT_SSH_ENABLED,
        }
    }
}

/// Host-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub hostname: Option<String>,
    pub firmware_version: Option<String>,
    /// NTP servers in appearance order.
    pub ntp_servers: Vec<String>,
}
