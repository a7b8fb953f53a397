use clap::{Parser, Subcommand};
use hestia::cmd::{
    execute::{self, ExecuteArgs},
    simulate::{self, SimulateArgs},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs a configured request and prints the hex-encoded payload.
    Execute(ExecuteArgs),
    /// Simulates a request and prints the harness-style JSON report.
    Simulate(SimulateArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr; stdout carries only the payload or report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Execute(args) => execute::execute(args).await?,
        Commands::Simulate(args) => simulate::execute(args).await?,
    }

    Ok(())
}
