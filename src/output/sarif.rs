use crate::error::Result;
use crate::rules::{builtin, RiskFinding, Severity};

use serde_json::{json, Value};

/// Render findings as SARIF 2.1.0.
///
/// Produces a self-contained SARIF log compatible with GitHub Code Scanning
/// and other SARIF consumers. The rules table always lists the full catalog
/// so consumers see a stable rule set across reports; results reference the
/// audited export as the artifact, with the offending line where known.
pub fn render(findings: &[RiskFinding], target_name: &str) -> Result<String> {
    let rules: Vec<Value> = builtin::all_checks()
        .iter()
        .map(|check| {
            let meta = check.metadata();
            json!({
                "id": meta.risk_type.to_string(),
                "name": meta.name,
                "shortDescription": { "text": meta.description },
                "help": { "text": meta.risk_type.remediation() },
                "defaultConfiguration": {
                    "level": severity_to_sarif_level(meta.default_severity),
                },
                "properties": {
                    "tags": [meta.category.to_string()],
                },
            })
        })
        .collect();

    let results: Vec<Value> = findings
        .iter()
        .map(|f| {
            let mut result = json!({
                "ruleId": f.risk_type.to_string(),
                "level": severity_to_sarif_level(f.severity),
                "message": { "text": f.description },
                "fixes": [{
                    "description": { "text": f.remediation },
                }],
            });

            if let Some(evidence) = &f.evidence {
                let mut physical = json!({
                    "artifactLocation": { "uri": target_name },
                });
                if let Some(line) = evidence.line {
                    physical["region"] = json!({ "startLine": line });
                }
                result["locations"] = json!([{ "physicalLocation": physical }]);
            }

            result
        })
        .collect();

    let sarif = json!({
        "$schema": "https://docs.oasis-open.org/sarif/sarif/v2.1.0/errata01/os/schemas/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "Rampart",
                    "informationUri": "https://github.com/rampart-sec/rampart",
                    "version": env!("CARGO_PKG_VERSION"),
                    "semanticVersion": env!("CARGO_PKG_VERSION"),
                    "rules": rules,
                },
            },
            "results": results,
            "automationDetails": {
                "id": format!("rampart/{}", target_name),
            },
        }],
    });

    let output = serde_json::to_string_pretty(&sarif)?;
    Ok(output)
}

fn severity_to_sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low => "note",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Evidence, RiskType};

    #[test]
    fn log_is_valid_json_with_full_rule_table() {
        let findings = vec![RiskFinding::new(
            RiskType::OpenInbound,
            "open inbound",
            Some(Evidence::at_line("WAN -> LAN", 4)),
        )];
        let out = render(&findings, "fw.cfg").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["version"], "2.1.0");
        let rules = value["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 12);

        let results = value["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["ruleId"], "OPEN_INBOUND");
        assert_eq!(results[0]["level"], "error");
        let region = &results[0]["locations"][0]["physicalLocation"]["region"];
        assert_eq!(region["startLine"], 4);
    }

    #[test]
    fn severity_maps_to_sarif_levels() {
        assert_eq!(severity_to_sarif_level(Severity::Critical), "error");
        assert_eq!(severity_to_sarif_level(Severity::High), "error");
        assert_eq!(severity_to_sarif_level(Severity::Medium), "warning");
        assert_eq!(severity_to_sarif_level(Severity::Low), "note");
    }

    #[test]
    fn evidence_without_line_omits_region() {
        let findings = vec![RiskFinding::new(
            RiskType::DhcpOnWan,
            "dhcp on wan",
            Some(Evidence::named("X1")),
        )];
        let out = render(&findings, "fw.cfg").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let physical = &value["runs"][0]["results"][0]["locations"][0]["physicalLocation"];
        assert_eq!(physical["artifactLocation"]["uri"], "fw.cfg");
        assert!(physical.get("region").is_none());
    }
}
