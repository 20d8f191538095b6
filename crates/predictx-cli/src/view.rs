//! Results view lifecycle.
//!
//! A view issues at most one prediction request per mount. After a failure
//! it can be re-armed once per explicit retry; nothing retries on its own.
//!
//! ```text
//! Idle ──begin_fetch──▶ Fetching ──complete──▶ Succeeded(prediction)
//!  ▲                                  │
//!  └─────────── retry ◀── Failed(message)
//! ```

use predictx_domain::{PredictionRequest, PredictionResponse};
use predictx_engine::{validate_teams, InputError, ValidatedMatch};
use std::future::Future;
use thiserror::Error;

/// Where a results view is in its single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    Idle,
    /// One request in flight
    Fetching,
    /// Prediction received
    Succeeded(PredictionResponse),
    /// Request failed; message is shown verbatim
    Failed(String),
}

/// Illegal transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A request is already in flight
    #[error("A prediction is already being fetched")]
    AlreadyFetching,

    /// The view already holds a prediction
    #[error("Prediction already loaded")]
    AlreadyLoaded,

    /// The last request failed; call `retry` first
    #[error("Previous request failed; retry explicitly")]
    RetryRequired,

    /// `complete` was called with no request in flight
    #[error("No prediction request in flight")]
    NotFetching,
}

/// Results view for one fixture
#[derive(Debug, Clone)]
pub struct ResultsView {
    fixture: ValidatedMatch,
    state: FetchState,
}

impl ResultsView {
    /// Mount a view for a fixture
    ///
    /// Applies the same presence and inequality checks as the server.
    pub fn open(home_team: &str, away_team: &str) -> Result<Self, InputError> {
        Ok(Self {
            fixture: validate_teams(home_team, away_team)?,
            state: FetchState::Idle,
        })
    }

    /// Current state
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The fixture this view shows
    pub fn fixture(&self) -> &ValidatedMatch {
        &self.fixture
    }

    /// Move `Idle → Fetching` and return the request to send
    pub fn begin_fetch(&mut self) -> Result<PredictionRequest, ViewError> {
        match self.state {
            FetchState::Idle => {
                self.state = FetchState::Fetching;
                Ok(PredictionRequest::new(
                    self.fixture.home_team(),
                    self.fixture.away_team(),
                ))
            }
            FetchState::Fetching => Err(ViewError::AlreadyFetching),
            FetchState::Succeeded(_) => Err(ViewError::AlreadyLoaded),
            FetchState::Failed(_) => Err(ViewError::RetryRequired),
        }
    }

    /// Record the outcome of the in-flight request
    pub fn complete(
        &mut self,
        result: Result<PredictionResponse, String>,
    ) -> Result<&FetchState, ViewError> {
        if self.state != FetchState::Fetching {
            return Err(ViewError::NotFetching);
        }

        self.state = match result {
            Ok(prediction) => FetchState::Succeeded(prediction),
            Err(message) => FetchState::Failed(message),
        };
        Ok(&self.state)
    }

    /// Re-arm a failed view (`Failed → Idle`)
    ///
    /// Returns false, changing nothing, from any other state.
    pub fn retry(&mut self) -> bool {
        if matches!(self.state, FetchState::Failed(_)) {
            self.state = FetchState::Idle;
            true
        } else {
            false
        }
    }

    /// Run one fetch through `fetch`, recording its outcome
    pub async fn load<F, Fut, E>(&mut self, fetch: F) -> Result<&FetchState, ViewError>
    where
        F: FnOnce(PredictionRequest) -> Fut,
        Fut: Future<Output = Result<PredictionResponse, E>>,
        E: std::fmt::Display,
    {
        let request = self.begin_fetch()?;
        let result = fetch(request).await.map_err(|e| e.to_string());
        self.complete(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction() -> PredictionResponse {
        PredictionResponse {
            home_win: 45,
            draw: 30,
            away_win: 25,
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
        }
    }

    #[test]
    fn test_open_validates_teams() {
        assert_eq!(
            ResultsView::open("Arsenal", "Arsenal").unwrap_err(),
            InputError::SameTeam
        );
        assert_eq!(
            ResultsView::open("", "Chelsea").unwrap_err(),
            InputError::MissingTeam
        );
        assert_eq!(
            ResultsView::open("Arsenal", "Chelsea").unwrap().state(),
            &FetchState::Idle
        );
    }

    #[test]
    fn test_single_in_flight_fetch() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();

        let request = view.begin_fetch().unwrap();
        assert_eq!(request, PredictionRequest::new("Arsenal", "Chelsea"));
        assert_eq!(view.begin_fetch(), Err(ViewError::AlreadyFetching));
    }

    #[test]
    fn test_success_is_terminal() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();
        view.begin_fetch().unwrap();
        view.complete(Ok(prediction())).unwrap();

        assert_eq!(view.state(), &FetchState::Succeeded(prediction()));
        assert_eq!(view.begin_fetch(), Err(ViewError::AlreadyLoaded));
        assert!(!view.retry());
    }

    #[test]
    fn test_failure_requires_explicit_retry() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();
        view.begin_fetch().unwrap();
        view.complete(Err("Failed to generate prediction. Please try again.".to_string()))
            .unwrap();

        assert_eq!(view.begin_fetch(), Err(ViewError::RetryRequired));
        assert!(view.retry());
        assert_eq!(view.state(), &FetchState::Idle);
        assert!(view.begin_fetch().is_ok());
    }

    #[test]
    fn test_complete_without_fetch() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();
        assert_eq!(view.complete(Ok(prediction())), Err(ViewError::NotFetching));
    }

    #[tokio::test]
    async fn test_load_records_error_message() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();

        let state = view
            .load(|_| async { Err::<PredictionResponse, _>("Please select different teams") })
            .await
            .unwrap();
        assert_eq!(
            state,
            &FetchState::Failed("Please select different teams".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut view = ResultsView::open("Arsenal", "Chelsea").unwrap();

        let state = view
            .load(|request| async move {
                assert_eq!(request.home(), "Arsenal");
                Ok::<_, String>(prediction())
            })
            .await
            .unwrap()
            .clone();
        assert_eq!(state, FetchState::Succeeded(prediction()));
    }
}
