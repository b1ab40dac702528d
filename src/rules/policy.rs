use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{RiskEngine, RiskFinding, RiskType, Severity};

/// Policy verdict, the final pass/fail decision after applying the ignore
/// list and severity overrides to raw findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyVerdict {
    pub pass: bool,
    pub total_findings: usize,
    pub effective_findings: usize,
    /// Score over the effective findings, in `[0, 100]`.
    pub score: u8,
    pub highest_severity: Option<Severity>,
    pub fail_threshold: Severity,
    pub fail_under: Option<u8>,
}

/// Policy configuration loaded from `.rampart.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Minimum severity to fail the audit.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// Fail when the score drops below this value, independent of
    /// individual severities.
    #[serde(default)]
    pub fail_under: Option<u8>,
    /// Check types to ignore entirely.
    #[serde(default)]
    pub ignore_checks: HashSet<RiskType>,
    /// Per-check severity overrides.
    #[serde(default)]
    pub overrides: HashMap<RiskType, Severity>,
}

fn default_fail_on() -> Severity {
    Severity::High
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fail_on: Severity::High,
            fail_under: None,
            ignore_checks: HashSet::new(),
            overrides: HashMap::new(),
        }
    }
}

impl Policy {
    /// Filter findings: remove ignored checks, apply severity overrides.
    pub fn apply(&self, findings: &[RiskFinding]) -> Vec<RiskFinding> {
        findings
            .iter()
            .filter(|f| !self.ignore_checks.contains(&f.risk_type))
            .map(|f| {
                let mut f = f.clone();
                if let Some(&override_sev) = self.overrides.get(&f.risk_type) {
                    f.severity = override_sev;
                }
                f
            })
            .collect()
    }

    /// Evaluate raw findings against this policy and produce a verdict.
    /// The score is computed over the effective (post-apply) findings, so
    /// ignoring a check or downgrading a severity also raises the score.
    pub fn evaluate(&self, findings: &[RiskFinding]) -> PolicyVerdict {
        let effective = self.apply(findings);
        let score = RiskEngine::score(&effective);

        let highest = effective.iter().map(|f| f.severity).max();
        let severity_failed = effective.iter().any(|f| f.severity >= self.fail_on);
        let score_failed = self.fail_under.is_some_and(|floor| score < floor);

        PolicyVerdict {
            pass: !severity_failed && !score_failed,
            total_findings: findings.len(),
            effective_findings: effective.len(),
            score,
            highest_severity: highest,
            fail_threshold: self.fail_on,
            fail_under: self.fail_under,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(risk_type: RiskType) -> RiskFinding {
        RiskFinding::new(risk_type, "test", None)
    }

    #[test]
    fn default_policy_fails_on_high() {
        let verdict = Policy::default().evaluate(&[finding(RiskType::AnyAnyRule)]);
        assert!(!verdict.pass);
        assert_eq!(verdict.highest_severity, Some(Severity::High));
    }

    #[test]
    fn default_policy_passes_on_medium() {
        let verdict = Policy::default().evaluate(&[finding(RiskType::DefaultAdminUsername)]);
        assert!(verdict.pass);
    }

    #[test]
    fn ignored_check_drops_finding_and_restores_score() {
        let mut policy = Policy::default();
        policy.ignore_checks.insert(RiskType::OpenInbound);
        let verdict = policy.evaluate(&[finding(RiskType::OpenInbound)]);
        assert!(verdict.pass);
        assert_eq!(verdict.total_findings, 1);
        assert_eq!(verdict.effective_findings, 0);
        assert_eq!(verdict.score, 100);
    }

    #[test]
    fn override_downgrades_severity_and_verdict() {
        let mut policy = Policy::default();
        policy.overrides.insert(RiskType::OpenInbound, Severity::Low);
        let verdict = policy.evaluate(&[finding(RiskType::OpenInbound)]);
        assert!(verdict.pass);
        assert_eq!(verdict.score, 99);
    }

    #[test]
    fn fail_under_fails_low_scores_even_without_high_findings() {
        let mut policy = Policy::default();
        policy.fail_under = Some(95);
        // ten low findings: no severity trip, but score 90 < 95
        let findings: Vec<_> = (0..10).map(|_| finding(RiskType::NoNtp)).collect();
        let verdict = policy.evaluate(&findings);
        assert_eq!(verdict.score, 90);
        assert!(!verdict.pass);
    }

    #[test]
    fn policy_parses_from_toml() {
        let text = r#"
fail_on = "critical"
fail_under = 70
ignore_checks = ["RULE_NO_DESCRIPTION"]

[overrides]
NO_NTP = "medium"
"#;
        let policy: Policy = toml::from_str(text).unwrap();
        assert_eq!(policy.fail_on, Severity::Critical);
        assert_eq!(policy.fail_under, Some(70));
        assert!(policy.ignore_checks.contains(&RiskType::RuleNoDescription));
        assert_eq!(
            policy.overrides.get(&RiskType::NoNtp),
            Some(&Severity::Medium)
        );
    }
}
