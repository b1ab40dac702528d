use serde::{Deserialize, Serialize};

/// An interface without a `dhcp-server` clause is not serving DHCP.
pub const DEFAULT_DHCP_SERVER_ENABLED: bool = false;

/// A physical or virtual interface bound to a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInterface {
    pub name: String,
    /// Free-form zone token; WAN/LAN/Guest/DMZ are meaningful to the catalog
    /// by case-insensitive match.
    pub zone: String,
    pub ip_address: Option<String>,
    pub dhcp_server_enabled: bool,
}

/// One VPN policy: name plus the cipher and auth tokens as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnConfig {
    pub name: String,
    pub encryption: String,
    pub authentication: String,
}
