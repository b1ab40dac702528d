use crate::rules::policy::PolicyVerdict;
use crate::rules::{RiskFinding, Severity};

/// Render findings as console output, grouped by severity then source line.
pub fn render(findings: &[RiskFinding], verdict: &PolicyVerdict, target_name: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n  Audit of {}\n", target_name));

    if findings.is_empty() {
        output.push_str("\n  No risks detected.\n");
        output.push_str(&format!("\n  Score: {}/100\n\n", verdict.score));
        return output;
    }

    // Sort by severity (critical first), then by source line
    let mut sorted: Vec<&RiskFinding> = findings.iter().collect();
    sorted.sort_by(|a, b| {
        b.severity.cmp(&a.severity).then_with(|| {
            let a_line = a.evidence.as_ref().and_then(|e| e.line);
            let b_line = b.evidence.as_ref().and_then(|e| e.line);
            a_line.cmp(&b_line)
        })
    });

    output.push_str(&format!("\n  {} finding(s):\n\n", findings.len()));

    for finding in &sorted {
        let severity_tag = match finding.severity {
            Severity::Critical => "[CRITICAL]",
            Severity::High => "[HIGH]    ",
            Severity::Medium => "[MEDIUM]  ",
            Severity::Low => "[LOW]     ",
        };

        output.push_str(&format!(
            "  {} {} {}\n",
            severity_tag, finding.risk_type, finding.description
        ));
        if let Some(evidence) = &finding.evidence {
            let at = match evidence.line {
                Some(line) => format!("{} (line {})", evidence.reference, line),
                None => evidence.reference.clone(),
            };
            output.push_str(&format!("           at {}\n", at));
        }
        output.push_str(&format!("           fix: {}\n", finding.remediation));
        output.push('\n');
    }

    let status = if verdict.pass { "PASS" } else { "FAIL" };
    output.push_str(&format!("  Score: {}/100\n", verdict.score));
    output.push_str(&format!(
        "  Result: {} (threshold: {}, highest: {})\n\n",
        status,
        verdict.fail_threshold,
        verdict
            .highest_severity
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none".into()),
    ));

    output
}
