//! End-to-end tests for the Predictor

#[cfg(test)]
mod tests {
    use crate::{PredictError, Predictor, GENERIC_FAILURE_MESSAGE};
    use predictx_domain::{PredictionRequest, PredictionResponse};
    use predictx_llm::MockProvider;

    fn predict(completion: &str, home: &str, away: &str) -> Result<PredictionResponse, PredictError> {
        let predictor = Predictor::new(MockProvider::new(completion));
        tokio_test::block_on(predictor.predict(&PredictionRequest::new(home, away)))
    }

    #[test]
    fn test_full_prediction_flow() {
        let prediction = predict("HOME:45,DRAW:30,AWAY:25", "Arsenal", "Chelsea").unwrap();
        assert_eq!(
            prediction,
            PredictionResponse {
                home_win: 45,
                draw: 30,
                away_win: 25,
                home_team: "Arsenal".to_string(),
                away_team: "Chelsea".to_string(),
            }
        );
    }

    #[test]
    fn test_same_team_rejected() {
        let err = predict("HOME:45,DRAW:30,AWAY:25", "Arsenal", "Arsenal").unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.public_message(), "Please select different teams");
    }

    #[test]
    fn test_missing_team_rejected() {
        let err = predict("HOME:45,DRAW:30,AWAY:25", "", "Chelsea").unwrap_err();
        assert_eq!(err.public_message(), "Both teams are required");
    }

    #[test]
    fn test_refusal_is_generic_failure() {
        let err = predict("I cannot provide that.", "Arsenal", "Chelsea").unwrap_err();
        assert!(matches!(err, PredictError::MalformedGenerationOutput(_)));
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_bad_sum_is_generic_failure() {
        let err = predict("HOME:50,DRAW:30,AWAY:30", "Arsenal", "Chelsea").unwrap_err();
        assert!(matches!(err, PredictError::PercentageSumInvalid { sum: 110 }));
        assert_eq!(err.public_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_chatty_completion_accepted() {
        let prediction = predict(
            "Based on history, my estimate is HOME:52,DRAW:26,AWAY:22.",
            "Bayern Munich",
            "Borussia Dortmund",
        )
        .unwrap();
        assert_eq!(prediction.total(), 100);
        assert_eq!(prediction.home_team, "Bayern Munich");
    }

    #[test]
    fn test_identical_requests_call_provider_each_time() {
        let llm = MockProvider::new("HOME:40,DRAW:30,AWAY:30");
        let predictor = Predictor::new(llm.clone());
        let request = PredictionRequest::new("Ajax", "Feyenoord");

        tokio_test::block_on(async {
            predictor.predict(&request).await.unwrap();
            predictor.predict(&request).await.unwrap();
        });

        assert_eq!(llm.call_count(), 2);
    }
}
