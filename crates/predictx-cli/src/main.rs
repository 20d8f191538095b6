//! PredictX CLI - Command-line client for match outcome predictions.

use clap::Parser;
use predictx_cli::{commands, Cli, Command, Formatter};
use predictx_domain::TeamCatalog;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(level))
        .init();

    let formatter = Formatter::new(cli.format, !cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> predictx_cli::Result<()> {
    let catalog = match &cli.teams {
        Some(path) => TeamCatalog::from_json(&std::fs::read_to_string(path)?)?,
        None => TeamCatalog::builtin().clone(),
    };

    match cli.command {
        Command::Teams(args) => commands::execute_teams(args, &catalog, formatter),
        Command::Predict(args) => commands::execute_predict(args, &catalog, formatter).await,
    }
}
