use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::rules::policy::Policy;

/// Top-level configuration from `.rampart.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
}

impl Config {
    /// Load config from a TOML file. Returns default if the file doesn't
    /// exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# Rampart configuration
# See https://github.com/rampart-sec/rampart for documentation.

[policy]
# Minimum severity to fail the audit (low, medium, high, critical).
fail_on = "high"

# Fail when the score drops below this value.
# fail_under = 80

# Check types to ignore entirely.
# ignore_checks = ["RULE_NO_DESCRIPTION"]

# Per-check severity overrides.
# [policy.overrides]
# "NO_NTP" = "medium"
"#
    }
}
