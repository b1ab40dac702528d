use crate::model::ParsedConfig;
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// RULE_NO_DESCRIPTION: access rule without a documented intent.
///
/// Fires once per offending rule, so the deduction scales with how much of
/// the policy is undocumented. Whitespace-only descriptions count as
/// missing.
pub struct RuleNoDescriptionCheck;

impl RiskCheck for RuleNoDescriptionCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::RuleNoDescription;
        CheckMetadata {
            risk_type,
            name: "Rule without description".into(),
            description: "An access rule has no description documenting its intent".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .access_rules
            .iter()
            .filter(|rule| !rule.has_description())
            .map(|rule| {
                RiskFinding::new(
                    RiskType::RuleNoDescription,
                    format!("Rule at line {} has no description", rule.source_line),
                    Some(Evidence::at_line(rule.summary(), rule.source_line)),
                )
            })
            .collect()
    }
}
