//! HTTP request handlers for the prediction server.
//!
//! Implements the prediction and health check endpoints using axum.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use predictx_domain::traits::LlmProvider;
use predictx_domain::{ErrorResponse, PredictionRequest, PredictionResponse};
use predictx_engine::{PredictError, Predictor, GENERIC_FAILURE_MESSAGE};
use serde::{Deserialize, Serialize};
use tracing::{error, info_span, Instrument};

/// Shared application state
pub struct AppState<L>
where
    L: LlmProvider,
{
    /// Predictor wrapping the generation provider
    pub predictor: Predictor<L>,
}

impl<L> AppState<L>
where
    L: LlmProvider,
{
    /// Create state around a provider
    pub fn new(llm_provider: L) -> Self {
        Self {
            predictor: Predictor::new(llm_provider),
        }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmProvider,
{
    fn clone(&self) -> Self {
        Self {
            predictor: self.predictor.clone(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Generation model in use
    pub model: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Prediction pipeline error
    Predict(PredictError),
    /// Request body could not be decoded
    MalformedBody(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Predict(e) if e.is_client_error() => {
                (StatusCode::BAD_REQUEST, e.public_message())
            }
            AppError::Predict(e) => {
                error!("Prediction error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.public_message())
            }
            AppError::MalformedBody(detail) => {
                error!("Prediction error: undecodable request body: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        AppError::Predict(e)
    }
}

/// POST /api/predict - Predict a fixture
///
/// The body is decoded by hand so that an undecodable body lands in the
/// same generic failure as every other post-validation error.
async fn predict<L>(
    State(state): State<AppState<L>>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, AppError>
where
    L: LlmProvider + 'static,
{
    let request: PredictionRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::MalformedBody(e.to_string()))?;

    let span = info_span!(
        "predict",
        home_team = request.home(),
        away_team = request.away()
    );

    let prediction = state.predictor.predict(&request).instrument(span).await?;

    Ok(Json(prediction))
}

/// GET /health - Liveness check
async fn health_check<L>(State(state): State<AppState<L>>) -> Json<HealthCheckResponse>
where
    L: LlmProvider + 'static,
{
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        model: state.predictor.model_name().to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router<L>(state: AppState<L>) -> AxumRouter
where
    L: LlmProvider + 'static,
{
    AxumRouter::new()
        .route("/api/predict", post(predict::<L>))
        .route("/health", get(health_check::<L>))
        .with_state(state)
}
