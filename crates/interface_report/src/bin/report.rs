//! Benefit Report Binary
//!
//! Reads a report request as JSON and prints the evaluated report.
//!
//! # Usage
//!
//! ```bash
//! # Read the request from a file
//! cargo run --bin benefit-report -- request.json
//!
//! # Read the request from stdin
//! cat request.json | cargo run --bin benefit-report
//! ```
//!
//! # Environment Variables
//!
//! * `BENEFITS_DEFAULT_LOCALE` - Locale when the request names none (default: en)
//! * `BENEFITS_FALLBACK_LOCALE` - Locale consulted for missing labels (default: en)
//! * `BENEFITS_TIMEZONE` - IANA zone deciding "today" (default: UTC)
//! * `BENEFITS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use domain_benefit::{BenefitEngine, EngineConfig};
use interface_report::{build_report, read_request, ReportRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    let engine = BenefitEngine::from_config(&config).context("invalid engine configuration")?;
    tracing::info!(
        timezone = %config.timezone,
        default_locale = %config.default_locale,
        "engine ready"
    );

    let request = load_request(std::env::args().nth(1))?;
    let report = build_report(&engine, &request)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Loads configuration from the environment, falling back to defaults
fn load_config() -> EngineConfig {
    EngineConfig::from_env().unwrap_or_else(|err| {
        eprintln!("ignoring unreadable BENEFITS_* configuration: {err}");
        EngineConfig::default()
    })
}

/// Reads the request from `path`, or stdin when the path is absent or `-`
fn load_request(path: Option<String>) -> anyhow::Result<ReportRequest> {
    match path.as_deref() {
        None | Some("-") => read_request(io::stdin().lock()).context("reading request from stdin"),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {path}"))?;
            read_request(BufReader::new(file)).with_context(|| format!("reading {path}"))
        }
    }
}

/// Initializes the tracing subscriber; logs go to stderr so stdout stays JSON
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(io::stderr),
        )
        .init();
}
