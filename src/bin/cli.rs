use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rampart::config::Config;
use rampart::error::RampartError;
use rampart::output::OutputFormat;
use rampart::rules::{RiskEngine, Severity};
use rampart::AuditOptions;

/// Upper bound on accepted export size. Real exports top out well under a
/// megabyte; anything near this limit is not a firewall configuration.
const MAX_CONFIG_BYTES: u64 = 8 * 1024 * 1024;

#[derive(Parser)]
#[command(
    name = "rampart",
    about = "Risk auditor for exported firewall configurations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit an exported configuration file
    Audit {
        /// Path to the export, or '-' to read from stdin
        path: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json, sarif)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Minimum severity to fail (low, medium, high, critical)
        #[arg(long)]
        fail_on: Option<String>,

        /// Fail when the score drops below this value (0-100)
        #[arg(long)]
        fail_under: Option<u8>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List all catalog checks
    ListChecks {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .rampart.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_env("RAMPART_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Audit {
            path,
            config,
            format,
            fail_on,
            fail_under,
            output,
        } => cmd_audit(path, config, format, fail_on, fail_under, output),
        Commands::ListChecks { format } => cmd_list_checks(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

/// Read the export text, applying the transport-layer validation the core
/// deliberately does not do: reject empty and oversized inputs before they
/// reach the parser.
fn read_target(path: &Path) -> Result<(String, String), RampartError> {
    let (name, text) = if path.as_os_str() == "-" {
        ("stdin".to_string(), std::io::read_to_string(std::io::stdin())?)
    } else {
        let metadata = std::fs::metadata(path)?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(RampartError::Input(format!(
                "{} is {} bytes, above the {} byte limit",
                path.display(),
                metadata.len(),
                MAX_CONFIG_BYTES
            )));
        }
        (
            path.display().to_string(),
            std::fs::read_to_string(path)?,
        )
    };

    if text.trim().is_empty() {
        return Err(RampartError::Input(format!("{} is empty", name)));
    }
    if text.len() as u64 > MAX_CONFIG_BYTES {
        return Err(RampartError::Input(format!(
            "{} is {} bytes, above the {} byte limit",
            name,
            text.len(),
            MAX_CONFIG_BYTES
        )));
    }

    Ok((name, text))
}

fn cmd_audit(
    path: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    fail_under: Option<u8>,
    output_path: Option<PathBuf>,
) -> Result<i32, RampartError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let sev = Severity::from_str_lenient(&s);
        if sev.is_none() {
            eprintln!("Warning: unknown severity '{}', using config default", s);
        }
        sev
    });

    let (target_name, text) = read_target(&path)?;

    let options = AuditOptions {
        config_path: config,
        format,
        fail_on_override: fail_on,
        fail_under_override: fail_under,
    };

    let report = rampart::audit(&target_name, &text, &options)?;
    let rendered = rampart::render_report(&report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = policy failure
    Ok(if report.verdict.pass { 0 } else { 1 })
}

fn cmd_list_checks(format_str: String) -> Result<i32, RampartError> {
    let engine = RiskEngine::new();
    let checks = engine.list_checks();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&checks)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<24} {:<28} {:<10} CATEGORY", "TYPE", "NAME", "SEVERITY");
            println!("{}", "-".repeat(88));
            for check in &checks {
                println!(
                    "{:<24} {:<28} {:<10} {}",
                    check.risk_type.to_string(),
                    check.name,
                    check.default_severity.to_string(),
                    check.category,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, RampartError> {
    let path = PathBuf::from(".rampart.toml");

    if path.exists() && !force {
        eprintln!(".rampart.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .rampart.toml");

    Ok(0)
}
