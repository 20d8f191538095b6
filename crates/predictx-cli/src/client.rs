//! HTTP client for the prediction endpoint.

use crate::error::{CliError, Result};
use predictx_domain::{ErrorResponse, PredictionRequest, PredictionResponse};
use tracing::debug;

/// Message shown when an error response carries no `error` field
pub const FALLBACK_ERROR: &str = "Prediction failed";

/// Client for `POST /api/predict`
#[derive(Debug, Clone)]
pub struct PredictClient {
    base_url: String,
    http: reqwest::Client,
}

impl PredictClient {
    /// Create a client for the server at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Endpoint URL
    pub fn url(&self) -> String {
        format!("{}/api/predict", self.base_url)
    }

    /// Send exactly one prediction request
    ///
    /// A non-2xx answer becomes `CliError::Api` carrying the server's
    /// `error` string verbatim.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        debug!("POST {}", self.url());

        let response = self.http.post(self.url()).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            debug!("Server answered HTTP {}", status);
            return Err(CliError::Api(error_message(&body)));
        }

        let prediction: PredictionResponse = response.json().await?;
        Ok(prediction)
    }
}

/// Extract the user-facing message from an error body
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorResponse>(body)
        .map(|e| e.error)
        .ok()
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(
            PredictClient::new("http://localhost:3000/").url(),
            "http://localhost:3000/api/predict"
        );
    }

    #[test]
    fn test_error_message_verbatim() {
        assert_eq!(
            error_message(br#"{"error": "Please select different teams"}"#),
            "Please select different teams"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(b"<html>Bad Gateway</html>"), FALLBACK_ERROR);
        assert_eq!(error_message(br#"{"message": "nope"}"#), FALLBACK_ERROR);
        assert_eq!(error_message(br#"{"error": ""}"#), FALLBACK_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = PredictClient::new("http://127.0.0.1:9");
        let result = client
            .predict(&PredictionRequest::new("Arsenal", "Chelsea"))
            .await;
        assert!(matches!(result, Err(CliError::Connection(_))));
    }
}
