//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::*;
use predictx_domain::{Outcome, PredictionResponse};

/// Width of a 100% bar, in characters
const BAR_WIDTH: u32 = 40;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a prediction.
    pub fn format_prediction(&self, prediction: &PredictionResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(prediction)?),
            OutputFormat::Text => Ok(self.format_prediction_text(prediction)),
        }
    }

    fn format_prediction_text(&self, prediction: &PredictionResponse) -> String {
        let mut lines = vec![
            self.colorize(
                &format!("{} vs {}", prediction.home_team, prediction.away_team),
                "cyan",
            ),
            String::new(),
        ];

        let label_width = Outcome::ALL
            .iter()
            .map(|o| prediction.label(*o).chars().count())
            .max()
            .unwrap_or(0);

        for outcome in Outcome::ALL {
            let pct = prediction.percentage(outcome);
            let line = format!(
                "{:<width$}  {:>3}%  {}",
                prediction.label(outcome),
                pct,
                bar(pct),
                width = label_width
            );

            if prediction.is_favourite(outcome) {
                lines.push(self.colorize(&format!("{} ★", line), "yellow"));
            } else {
                lines.push(line);
            }
        }

        lines.join("\n")
    }

    /// Format autocomplete suggestions.
    pub fn format_teams(&self, query: &str, teams: &[&str]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(teams)?),
            OutputFormat::Text if teams.is_empty() => {
                Ok(self.warning(&format!("No teams match '{}'", query)))
            }
            OutputFormat::Text => Ok(teams.join("\n")),
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "yellow" => text.yellow().bold().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Horizontal bar proportional to `pct`
fn bar(pct: u32) -> String {
    let filled = pct.min(100) * BAR_WIDTH / 100;
    "█".repeat(filled as usize)
}
