use crate::model::{is_any, ParsedConfig};
use crate::rules::{CheckMetadata, Evidence, RiskCheck, RiskFinding, RiskType};

/// ANY_ANY_RULE: rule with wildcard zones on both sides.
///
/// Zone-agnostic, unlike the open-inbound check: it looks only at
/// `from any to any`, regardless of action or the object fields. Even a
/// deny written this way signals the policy was not thought through per
/// zone pair.
pub struct AnyAnyRuleCheck;

impl RiskCheck for AnyAnyRuleCheck {
    fn metadata(&self) -> CheckMetadata {
        let risk_type = RiskType::AnyAnyRule;
        CheckMetadata {
            risk_type,
            name: "Any-to-any rule".into(),
            description: "A rule matches traffic between all zones".into(),
            default_severity: risk_type.default_severity(),
            category: risk_type.category(),
        }
    }

    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        config
            .access_rules
            .iter()
            .filter(|rule| is_any(&rule.from_zone) && is_any(&rule.to_zone))
            .map(|rule| {
                RiskFinding::new(
                    RiskType::AnyAnyRule,
                    format!(
                        "Rule at line {} applies between all zones instead of a \
                         specific zone pair",
                        rule.source_line
                    ),
                    Some(Evidence::at_line(rule.summary(), rule.source_line)),
                )
            })
            .collect()
    }
}
