//! The `execute` command: run one configured request and print the payload.

use clap::Parser;

use super::{CmdError, build_pipeline, load_requests, select_request};
use crate::config::AppConfig;

/// Arguments for the `execute` command.
#[derive(Parser, Debug)]
pub struct ExecuteArgs {
    /// Name of the request to run. Defaults to the first declared request.
    #[arg(short, long)]
    request: Option<String>,

    /// Directory holding app.yaml and requests.yaml.
    #[arg(short, long)]
    config_dir: Option<String>,
}

/// Runs one configured request and prints the hex-encoded payload.
pub async fn execute(args: ExecuteArgs) -> Result<(), CmdError> {
    let config = AppConfig::new(args.config_dir.as_deref())?;
    let requests = load_requests(&config)?;
    let request = select_request(requests, args.request.as_deref())?;

    tracing::info!(request = %request.name, property_id = %config.property_id, "Executing request.");

    let pipeline = build_pipeline(&config)?;
    let output = pipeline.run(&request).await?;

    if !request.expected_return_type.accepts(&output.result) {
        tracing::warn!(
            expected = ?request.expected_return_type,
            "Encoded payload does not match the declared return type."
        );
    }

    for line in &output.logs {
        println!("{line}");
    }
    println!("{}", output.result.to_hex());

    Ok(())
}
