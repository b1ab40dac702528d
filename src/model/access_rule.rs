use serde::{Deserialize, Serialize};

/// One firewall policy entry controlling traffic between zones.
///
/// Zone/object/service tokens are kept as written; only the comparison
/// against the wildcard token is case-insensitive (see [`super::is_any`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pub from_zone: String,
    pub to_zone: String,
    pub source: String,
    pub destination: String,
    pub service: String,
    pub action: RuleAction,
    pub description: Option<String>,
    /// 1-based line in the source export, for traceability.
    pub source_line: usize,
}

impl AccessRule {
    /// Whether the rule carries a non-empty description.
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty())
    }

    /// Compact one-line form for finding evidence, e.g.
    /// `WAN -> LAN src=any dst=any svc=any allow`.
    pub fn summary(&self) -> String {
        format!(
            "{} -> {} src={} dst={} svc={} {}",
            self.from_zone, self.to_zone, self.source, self.destination, self.service, self.action
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Deny,
}

impl RuleAction {
    /// Parse an action token. Anything other than allow/deny means the
    /// directive is malformed and the whole line is dropped by the parser.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "allow" => Some(Self::Allow),
            "deny" => Some(Self::Deny),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(description: Option<&str>) -> AccessRule {
        AccessRule {
            from_zone: "WAN".into(),
            to_zone: "LAN".into(),
            source: "any".into(),
            destination: "any".into(),
            service: "any".into(),
            action: RuleAction::Allow,
            description: description.map(String::from),
            source_line: 1,
        }
    }

    #[test]
    fn action_token_parses_case_insensitively() {
        assert_eq!(RuleAction::from_token("allow"), Some(RuleAction::Allow));
        assert_eq!(RuleAction::from_token("DENY"), Some(RuleAction::Deny));
        assert_eq!(RuleAction::from_token("permit"), None);
    }

    #[test]
    fn blank_description_counts_as_missing() {
        assert!(!rule(None).has_description());
        assert!(!rule(Some("")).has_description());
        assert!(!rule(Some("   ")).has_description());
        assert!(rule(Some("allow branch VPN")).has_description());
    }
}
