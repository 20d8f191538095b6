//! Request and response shapes for the prediction endpoint
//!
//! Field names are camelCase on the wire (`homeTeam`, `homeWin`, ...).

use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Two team names as sent by the client
///
/// Both fields are optional on the wire. An absent or `null` field reads
/// the same as an empty string; presence is checked by the endpoint, not
/// by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// Home side
    #[serde(default)]
    pub home_team: Option<String>,

    /// Away side
    #[serde(default)]
    pub away_team: Option<String>,
}

impl PredictionRequest {
    /// Create a request for the given fixture
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: Some(home_team.into()),
            away_team: Some(away_team.into()),
        }
    }

    /// Home team name, empty when absent
    pub fn home(&self) -> &str {
        self.home_team.as_deref().unwrap_or("")
    }

    /// Away team name, empty when absent
    pub fn away(&self) -> &str {
        self.away_team.as_deref().unwrap_or("")
    }
}

/// A probability split for one fixture
///
/// `home_win + draw + away_win == 100` holds for every value produced by
/// the engine. The team names are echoed back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Home win percentage
    pub home_win: u32,
    /// Draw percentage
    pub draw: u32,
    /// Away win percentage
    pub away_win: u32,
    /// Home team, as sent
    pub home_team: String,
    /// Away team, as sent
    pub away_team: String,
}

impl PredictionResponse {
    /// Percentage for a single outcome
    pub fn percentage(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Home => self.home_win,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away_win,
        }
    }

    /// Sum of the three percentages
    pub fn total(&self) -> u64 {
        u64::from(self.home_win) + u64::from(self.draw) + u64::from(self.away_win)
    }

    /// Highest percentage across the three outcomes
    pub fn max_percentage(&self) -> u32 {
        self.home_win.max(self.draw).max(self.away_win)
    }

    /// The most likely outcome
    ///
    /// Ties resolve in `Home, Draw, Away` order.
    pub fn favourite(&self) -> Outcome {
        let max = self.max_percentage();
        Outcome::ALL
            .into_iter()
            .find(|o| self.percentage(*o) == max)
            .unwrap_or(Outcome::Home)
    }

    /// Whether `outcome` shares the highest percentage
    ///
    /// More than one outcome can be a favourite when percentages tie.
    pub fn is_favourite(&self, outcome: Outcome) -> bool {
        self.percentage(outcome) == self.max_percentage()
    }

    /// Display label for an outcome ("Arsenal Win", "Draw", ...)
    pub fn label(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Home => format!("{} Win", self.home_team),
            Outcome::Draw => "Draw".to_string(),
            Outcome::Away => format!("{} Win", self.away_team),
        }
    }
}

/// Error body returned for any non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
