use crate::error::Result;
use crate::rules::policy::PolicyVerdict;
use crate::rules::{RiskFinding, Severity};

use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    fingerprint: &'a str,
    score: u8,
    summary: Summary,
    findings: &'a [RiskFinding],
    verdict: &'a PolicyVerdict,
}

#[derive(Serialize)]
struct Summary {
    critical: usize,
    high: usize,
    medium: usize,
    low: usize,
}

impl Summary {
    fn of(findings: &[RiskFinding]) -> Self {
        let count = |sev| findings.iter().filter(|f| f.severity == sev).count();
        Self {
            critical: count(Severity::Critical),
            high: count(Severity::High),
            medium: count(Severity::Medium),
            low: count(Severity::Low),
        }
    }
}

/// Render findings as a JSON report.
pub fn render(
    findings: &[RiskFinding],
    verdict: &PolicyVerdict,
    target_name: &str,
    fingerprint: &str,
) -> Result<String> {
    let report = JsonReport {
        target: target_name,
        fingerprint,
        score: verdict.score,
        summary: Summary::of(findings),
        findings,
        verdict,
    };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Policy, RiskType};

    #[test]
    fn report_carries_target_score_and_counts() {
        let findings = vec![
            RiskFinding::new(RiskType::OpenInbound, "a", None),
            RiskFinding::new(RiskType::NoNtp, "b", None),
        ];
        let verdict = Policy::default().evaluate(&findings);
        let out = render(&findings, &verdict, "fw.cfg", "deadbeef").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["target"], "fw.cfg");
        assert_eq!(value["fingerprint"], "deadbeef");
        assert_eq!(value["score"], 100 - 25 - 1);
        assert_eq!(value["summary"]["critical"], 1);
        assert_eq!(value["summary"]["low"], 1);
        assert_eq!(value["findings"][0]["risk_type"], "OPEN_INBOUND");
        assert_eq!(value["findings"][0]["severity"], "critical");
    }
}
