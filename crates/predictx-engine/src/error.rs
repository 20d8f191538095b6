//! Error types for the prediction engine

use thiserror::Error;

/// Message returned for every failure after input validation
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate prediction. Please try again.";

/// Rejections raised while validating the two team names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// One or both names are absent or empty
    #[error("Both teams are required")]
    MissingTeam,

    /// Both names are identical
    #[error("Please select different teams")]
    SameTeam,
}

/// Errors that can occur while producing a prediction
#[derive(Error, Debug)]
pub enum PredictError {
    /// Request failed validation
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// The generation service call failed or timed out
    #[error("Generation call failed: {0}")]
    GenerationCallFailure(String),

    /// Completion text did not follow `HOME:X,DRAW:Y,AWAY:Z`
    #[error("Invalid AI response format: {0}")]
    MalformedGenerationOutput(String),

    /// Parsed percentages do not add up to 100
    #[error("Percentages must sum to 100 (got {sum})")]
    PercentageSumInvalid {
        /// Actual sum of the three values
        sum: u64,
    },
}

impl PredictError {
    /// True for failures caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::InvalidInput(_))
    }

    /// Message safe to show the caller
    ///
    /// Validation failures keep their specific text. Everything else
    /// collapses to [`GENERIC_FAILURE_MESSAGE`].
    pub fn public_message(&self) -> String {
        match self {
            PredictError::InvalidInput(e) => e.to_string(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
