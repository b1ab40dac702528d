//! Rampart — risk auditor for exported firewall configurations.
//!
//! Deterministic and offline: the same export text always produces the same
//! findings, the same score, and the same report. Parsing never fails;
//! unrecognized input degrades to an empty model, which the catalog reads
//! as "no protections configured".
//!
//! # Quick Start
//!
//! ```
//! use rampart::{audit, AuditOptions};
//!
//! let text = "wan management enable\nips disable";
//! let report = audit("fw.cfg", text, &AuditOptions::default()).unwrap();
//! println!("Score: {}/100, Pass: {}", report.verdict.score, report.verdict.pass);
//! ```
//!
//! The two core calls are also usable directly, without the config/policy
//! envelope:
//!
//! ```
//! use rampart::parser::parse;
//! use rampart::rules::RiskEngine;
//!
//! let config = parse("interface X1 zone WAN dhcp-server enable");
//! let findings = RiskEngine::new().analyze(&config);
//! let score = RiskEngine::score(&findings);
//! assert!(score < 100);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod rules;

use sha2::{Digest, Sha256};

use config::Config;
use error::Result;
use output::OutputFormat;
use rules::policy::PolicyVerdict;
use rules::{RiskEngine, RiskFinding};

/// Options for an audit invocation.
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Path to config file (defaults to `.rampart.toml` in the working
    /// directory).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail_on threshold.
    pub fail_on_override: Option<rules::Severity>,
    /// CLI override for the fail_under score floor.
    pub fail_under_override: Option<u8>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            fail_on_override: None,
            fail_under_override: None,
        }
    }
}

/// Complete audit report.
#[derive(Debug)]
pub struct AuditReport {
    pub target_name: String,
    /// SHA-256 of the raw export text, hex-encoded.
    pub fingerprint: String,
    /// Effective findings, after policy ignore/override handling.
    pub findings: Vec<RiskFinding>,
    pub verdict: PolicyVerdict,
}

/// Run a complete audit: load policy, parse, analyze, evaluate.
pub fn audit(target_name: &str, text: &str, options: &AuditOptions) -> Result<AuditReport> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| std::path::PathBuf::from(".rampart.toml"));
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.policy.fail_on = fail_on;
    }
    if let Some(fail_under) = options.fail_under_override {
        config.policy.fail_under = Some(fail_under);
    }

    let parsed = parser::parse(text);
    let engine = RiskEngine::new();
    let raw_findings = engine.analyze(&parsed);

    let effective_findings = config.policy.apply(&raw_findings);
    let verdict = config.policy.evaluate(&raw_findings);

    Ok(AuditReport {
        target_name: target_name.to_string(),
        fingerprint: fingerprint(text),
        findings: effective_findings,
        verdict,
    })
}

/// Render an audit report in the specified format.
pub fn render_report(report: &AuditReport, format: OutputFormat) -> Result<String> {
    output::render(
        &report.findings,
        &report.verdict,
        format,
        &report.target_name,
        &report.fingerprint,
    )
}

/// SHA-256 of the raw export text, hex-encoded. Ties a report to the exact
/// input it describes.
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
