//! PredictX Engine
//!
//! Turns two team names into a home/draw/away split by delegating the
//! analysis to a text-generation service and strictly parsing its answer.
//!
//! # Architecture
//!
//! ```text
//! PredictionRequest → validate → PromptBuilder → LlmProvider → parse → PredictionResponse
//! ```
//!
//! Every stage after validation either succeeds or ends the request. There
//! is no retry, no cache, and no repair of near-miss completions.
//!
//! # Example Usage
//!
//! ```no_run
//! use predictx_engine::Predictor;
//! use predictx_domain::PredictionRequest;
//! use predictx_llm::GeminiProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GeminiProvider::new("api-key", "gemini-2.5-flash")?;
//! let predictor = Predictor::new(llm);
//!
//! let prediction = predictor
//!     .predict(&PredictionRequest::new("Arsenal", "Chelsea"))
//!     .await?;
//!
//! println!(
//!     "{}% / {}% / {}%",
//!     prediction.home_win, prediction.draw, prediction.away_win
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod parser;
mod predictor;
mod prompt;
mod validator;

#[cfg(test)]
mod tests;

pub use error::{InputError, PredictError, GENERIC_FAILURE_MESSAGE};
pub use parser::{parse_completion, Percentages};
pub use predictor::{Predictor, Stage};
pub use prompt::{PromptBuilder, EXAMPLE_OUTPUT};
pub use validator::{validate_request, validate_teams, ValidatedMatch};
