//! Core Predictor implementation

use crate::error::PredictError;
use crate::parser::parse_completion;
use crate::prompt::PromptBuilder;
use crate::validator::validate_request;
use predictx_domain::traits::LlmProvider;
use predictx_domain::{PredictionRequest, PredictionResponse};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle of a single prediction request
///
/// Strictly linear. Any failure after `Validated` is terminal; there is no
/// transition back to `GenerationCalled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Body decoded
    Received,
    /// Team names accepted
    Validated,
    /// Prompt built
    Prompted,
    /// Generation service answered
    GenerationCalled,
    /// Completion parsed and checked
    Parsed,
    /// Terminal: prediction produced
    Succeeded,
    /// Terminal: request rejected or failed
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Received => "received",
            Stage::Validated => "validated",
            Stage::Prompted => "prompted",
            Stage::GenerationCalled => "generation_called",
            Stage::Parsed => "parsed",
            Stage::Succeeded => "succeeded",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The Predictor turns a pair of team names into a probability split
///
/// Stateless between calls: concurrent `predict` calls share nothing but
/// the provider handle.
pub struct Predictor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
}

impl<L> Clone for Predictor<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            llm_provider: Arc::clone(&self.llm_provider),
        }
    }
}

impl<L> Predictor<L>
where
    L: LlmProvider,
{
    /// Create a new Predictor
    pub fn new(llm_provider: L) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
        }
    }

    /// Model identifier of the underlying provider
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Produce a prediction for `request`
    ///
    /// Calls the generation service at most once.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictError> {
        debug!(stage = %Stage::Received, "Prediction request");

        let result = self.run(request).await;

        match &result {
            Ok(prediction) => info!(
                stage = %Stage::Succeeded,
                home_win = prediction.home_win,
                draw = prediction.draw,
                away_win = prediction.away_win,
                "Prediction produced"
            ),
            Err(e) if e.is_client_error() => {
                info!(stage = %Stage::Failed, error = %e, "Prediction request rejected")
            }
            Err(e) => debug!(stage = %Stage::Failed, error = %e, "Prediction failed"),
        }

        result
    }

    async fn run(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictError> {
        let fixture = validate_request(request)?;
        debug!(
            stage = %Stage::Validated,
            home_team = fixture.home_team(),
            away_team = fixture.away_team(),
            "Teams accepted"
        );

        let prompt = PromptBuilder::for_match(&fixture).build();
        debug!(stage = %Stage::Prompted, prompt_len = prompt.len(), "Prompt built");

        let completion = self
            .llm_provider
            .generate(&prompt)
            .await
            .map_err(|e| PredictError::GenerationCallFailure(e.to_string()))?;
        debug!(
            stage = %Stage::GenerationCalled,
            model = self.llm_provider.model_name(),
            completion_len = completion.len(),
            "Completion received"
        );

        let percentages = parse_completion(&completion)?;
        debug!(stage = %Stage::Parsed, "Completion parsed");

        Ok(PredictionResponse {
            home_win: percentages.home_win,
            draw: percentages.draw,
            away_win: percentages.away_win,
            home_team: fixture.home_team().to_string(),
            away_team: fixture.away_team().to_string(),
        })
    }
}
