//! PredictX Server CLI
//!
//! Starts the prediction HTTP server.

use clap::Parser;
use predictx_server::{config::ServerConfig, init_tracing, start_server, ServerError};
use std::path::PathBuf;
use std::process;

/// PredictX server - AI-assisted match outcome predictions over HTTP.
#[derive(Debug, Parser)]
#[command(name = "predictx-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Load configuration from a TOML file
    #[arg(short, long, env = "PREDICTX_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args = Args::parse();

    // Fails fast when GEMINI_API_KEY is absent
    let config = ServerConfig::load(args.config.as_deref())?;

    start_server(config).await
}
