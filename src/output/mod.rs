pub mod console;
pub mod json;
pub mod sarif;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::PolicyVerdict;
use crate::rules::RiskFinding;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Sarif,
}

impl OutputFormat {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" | "text" => Some(Self::Console),
            "json" => Some(Self::Json),
            "sarif" => Some(Self::Sarif),
            _ => None,
        }
    }
}

/// Render findings into the specified format.
///
/// `target_name` labels the audited input (a file path or `stdin`);
/// `fingerprint` is the SHA-256 of the raw text, carried so downstream
/// consumers can tie a report back to the exact export it describes.
pub fn render(
    findings: &[RiskFinding],
    verdict: &PolicyVerdict,
    format: OutputFormat,
    target_name: &str,
    fingerprint: &str,
) -> Result<String> {
    match format {
        OutputFormat::Console => Ok(console::render(findings, verdict, target_name)),
        OutputFormat::Json => json::render(findings, verdict, target_name, fingerprint),
        OutputFormat::Sarif => sarif::render(findings, target_name),
    }
}
