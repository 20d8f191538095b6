//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default prediction server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// PredictX CLI - AI-powered match outcome predictions.
#[derive(Debug, Parser)]
#[command(name = "predictx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Team list (JSON array of names) used instead of the bundled one
    #[arg(long, global = true)]
    pub teams: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Suggest team names matching a partial query
    Teams(TeamsArgs),

    /// Predict a fixture
    Predict(PredictArgs),
}

/// Arguments for the teams command.
#[derive(Debug, Parser)]
pub struct TeamsArgs {
    /// Partial team name (case-insensitive)
    pub query: String,
}

/// Arguments for the predict command.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// Home team
    pub home: String,

    /// Away team
    pub away: String,

    /// Prediction server URL
    #[arg(short, long, env = "PREDICTX_SERVER", default_value = DEFAULT_SERVER_URL)]
    pub server: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_predict() {
        let cli = Cli::try_parse_from(["predictx", "predict", "Arsenal", "Chelsea"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.home, "Arsenal");
                assert_eq!(args.away, "Chelsea");
            }
            other => panic!("Expected predict, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_teams_with_json() {
        let cli = Cli::try_parse_from(["predictx", "--format", "json", "teams", "real"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Teams(TeamsArgs { ref query }) if query == "real"));
    }

    #[test]
    fn test_predict_requires_both_teams() {
        assert!(Cli::try_parse_from(["predictx", "predict", "Arsenal"]).is_err());
    }
}
