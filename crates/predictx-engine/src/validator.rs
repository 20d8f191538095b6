//! Input validation for prediction requests

use crate::error::InputError;
use predictx_domain::PredictionRequest;

/// A fixture that passed validation
///
/// Only constructible through [`validate_request`], so holding one means
/// both names are non-empty and different.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMatch {
    home_team: String,
    away_team: String,
}

impl ValidatedMatch {
    /// Home team name, exactly as sent
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    /// Away team name, exactly as sent
    pub fn away_team(&self) -> &str {
        &self.away_team
    }
}

/// Validate a raw request
///
/// Presence is checked before equality. Equality is exact and
/// case-sensitive; names are not trimmed or normalized.
pub fn validate_request(request: &PredictionRequest) -> Result<ValidatedMatch, InputError> {
    validate_teams(request.home(), request.away())
}

/// Validate a pair of team names
pub fn validate_teams(home_team: &str, away_team: &str) -> Result<ValidatedMatch, InputError> {
    if home_team.is_empty() || away_team.is_empty() {
        return Err(InputError::MissingTeam);
    }

    if home_team == away_team {
        return Err(InputError::SameTeam);
    }

    Ok(ValidatedMatch {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
    })
}
