//! Risk catalog and the engine that runs it.
//!
//! Every check implements [`RiskCheck`]; [`RiskEngine`] runs them in fixed
//! catalog order so two audits of the same input always produce the same
//! findings list. Scoring deducts a severity-weighted amount per finding
//! from a 100-point baseline.

pub mod builtin;
pub mod finding;
pub mod policy;

use tracing::debug;

pub use finding::{CheckMetadata, Evidence, RiskCategory, RiskFinding, RiskType, Severity};
pub use policy::{Policy, PolicyVerdict};

use crate::model::ParsedConfig;

/// A single catalog check.
///
/// Checks are pure functions over the parsed configuration: no I/O, no
/// shared state, no interaction between checks. `run` returns every
/// occurrence it detects, in input declaration order.
pub trait RiskCheck: Send + Sync {
    fn metadata(&self) -> CheckMetadata;
    fn run(&self, config: &ParsedConfig) -> Vec<RiskFinding>;
}

/// Runs the catalog against a parsed configuration.
pub struct RiskEngine {
    checks: Vec<Box<dyn RiskCheck>>,
}

impl RiskEngine {
    /// Engine with the full built-in catalog, in catalog order.
    pub fn new() -> Self {
        Self {
            checks: builtin::all_checks(),
        }
    }

    /// Engine with a custom check set. Order of `checks` is the order
    /// findings will be emitted in.
    pub fn with_checks(checks: Vec<Box<dyn RiskCheck>>) -> Self {
        Self { checks }
    }

    /// Run every check, concatenating findings in catalog order. Within one
    /// check, findings follow input declaration order.
    pub fn analyze(&self, config: &ParsedConfig) -> Vec<RiskFinding> {
        let mut findings = Vec::new();
        for check in &self.checks {
            let meta = check.metadata();
            let mut produced = check.run(config);
            debug!(check = %meta.risk_type, count = produced.len(), "check complete");
            findings.append(&mut produced);
        }
        findings
    }

    /// Score a findings list: 100 minus the summed severity weights, clamped
    /// to 0..=100. An empty list scores 100.
    pub fn score(findings: &[RiskFinding]) -> u8 {
        let deducted: i64 = findings.iter().map(|f| f.severity.weight() as i64).sum();
        (100_i64 - deducted).clamp(0, 100) as u8
    }

    /// Catalog metadata in emission order, for `list-checks` and SARIF rule
    /// tables.
    pub fn list_checks(&self) -> Vec<CheckMetadata> {
        self.checks.iter().map(|c| c.metadata()).collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
