//! Quillchat preflight CLI
//!
//! Runs the server's startup diagnostics standalone: scans the environment
//! for template secrets and deprecated variables, compares the config schema
//! version, and probes the RAG API. Findings are advisory; the process always
//! exits 0.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use preflight::{
    CustomConfig, EnvSnapshot, RagHealthProbe, log_findings, log_probe_outcome,
    run_startup_checks,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Quillchat preflight CLI
#[derive(Parser, Debug)]
#[command(name = "quillchat-preflight")]
#[command(author, version, about = "Quillchat startup diagnostics", long_about = None)]
struct Cli {
    /// Path to the custom config file
    #[arg(short, long, default_value = "quillchat.toml")]
    config: String,

    /// Timeout in seconds for the RAG API liveness probe
    #[arg(long, default_value_t = 5)]
    rag_timeout_secs: u64,

    /// Skip the RAG API liveness probe
    #[arg(long)]
    skip_probe: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let env = EnvSnapshot::capture();
    let config = match CustomConfig::load(&cli.config) {
        Ok(Some(config)) => Some(config),
        Ok(None) => {
            debug!(path = %cli.config, "No custom config file; version check skipped");
            None
        },
        Err(err) => {
            warn!(path = %cli.config, error = %err, "Failed to load custom config; version check skipped");
            None
        },
    };

    let findings = run_startup_checks(&env, config.as_ref());
    log_findings(&findings);

    if cli.skip_probe {
        debug!("RAG liveness probe skipped by flag");
    } else if let Some(base_url) = env.get("RAG_API_URL").filter(|url| !url.is_empty()) {
        match RagHealthProbe::new(base_url, Duration::from_secs(cli.rag_timeout_secs)) {
            Ok(probe) => {
                let outcome = probe.probe().await;
                log_probe_outcome(&outcome, probe.base_url());
            },
            Err(err) => warn!(error = %err, "Could not construct RAG probe client"),
        }
    } else {
        debug!("RAG_API_URL is not set; skipping liveness probe");
    }

    let critical = findings.iter().filter(|f| f.is_critical()).count();
    info!(
        findings = findings.len(),
        critical, "Preflight checks complete"
    );

    // Findings never fail the process; diagnostics must not block startup.
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
