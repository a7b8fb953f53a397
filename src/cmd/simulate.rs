//! The `simulate` command: run a request and print a harness-style report.

use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;

use super::{CmdError, build_pipeline, load_requests, select_request};
use crate::config::AppConfig;

/// Arguments for the `simulate` command.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Name of the request to simulate. Defaults to the first declared
    /// request.
    #[arg(short, long)]
    request: Option<String>,

    /// Directory holding app.yaml and requests.yaml.
    #[arg(short, long)]
    config_dir: Option<String>,
}

/// The report printed after a simulated run.
///
/// A failed run is still a successful simulation: the failure lands in
/// `error` and the command exits cleanly, the way the off-chain harness
/// reports captured errors.
#[derive(Debug, Serialize)]
pub struct SimulationReport {
    /// Name of the simulated request.
    pub request: String,
    /// Hex-encoded payload; absent when the run failed.
    pub result: Option<String>,
    /// Error string captured from a failed run.
    pub error: Option<String>,
    /// Captured terminal output of the run.
    pub logs: Vec<String>,
    /// When the simulation was performed.
    pub generated_at: DateTime<Utc>,
}

/// Simulates one configured request and prints the JSON report.
pub async fn execute(args: SimulateArgs) -> Result<(), CmdError> {
    let config = AppConfig::new(args.config_dir.as_deref())?;
    let requests = load_requests(&config)?;
    let request = select_request(requests, args.request.as_deref())?;

    tracing::info!(request = %request.name, "Simulating request.");

    let pipeline = build_pipeline(&config)?;
    let report = match pipeline.run(&request).await {
        Ok(output) => SimulationReport {
            request: request.name.clone(),
            result: Some(output.result.to_hex()),
            error: None,
            logs: output.logs,
            generated_at: Utc::now(),
        },
        Err(e) => {
            tracing::error!(error = %e, request = %request.name, "Simulation run failed.");
            SimulationReport {
                request: request.name.clone(),
                result: None,
                error: Some(e.to_string()),
                logs: Vec::new(),
                generated_at: Utc::now(),
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
