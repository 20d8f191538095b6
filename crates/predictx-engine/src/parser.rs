//! Parse completion text into a probability split
//!
//! The completion is untrusted text. The grammar token
//! `HOME:<digits>,DRAW:<digits>,AWAY:<digits>` (ASCII digits only) must appear somewhere in it,
//! contiguously and in that order; surrounding text is tolerated. Nothing is
//! repaired: no clamping, no rounding, no near-100 acceptance.

use crate::error::PredictError;
use regex::Regex;
use std::sync::LazyLock;

static GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"HOME:([0-9]+),DRAW:([0-9]+),AWAY:([0-9]+)").expect("grammar regex is valid")
});

/// Three percentages extracted from a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentages {
    /// Home win
    pub home_win: u32,
    /// Draw
    pub draw: u32,
    /// Away win
    pub away_win: u32,
}

impl Percentages {
    /// Sum of the three values, without overflow
    pub fn sum(&self) -> u64 {
        u64::from(self.home_win) + u64::from(self.draw) + u64::from(self.away_win)
    }
}

/// Parse and validate a completion
///
/// The first grammar match wins.
///
/// # Errors
///
/// - `MalformedGenerationOutput` when the token is absent or a digit group
///   does not fit a `u32`
/// - `PercentageSumInvalid` when the values do not sum to exactly 100
pub fn parse_completion(text: &str) -> Result<Percentages, PredictError> {
    let text = text.trim();

    let captures = GRAMMAR.captures(text).ok_or_else(|| {
        PredictError::MalformedGenerationOutput(format!("no grammar match in {:?}", excerpt(text)))
    })?;

    let group = |idx: usize| -> Result<u32, PredictError> {
        let digits = captures.get(idx).map(|m| m.as_str()).unwrap_or_default();
        digits.parse::<u32>().map_err(|e| {
            PredictError::MalformedGenerationOutput(format!("bad integer {:?}: {}", digits, e))
        })
    };

    let percentages = Percentages {
        home_win: group(1)?,
        draw: group(2)?,
        away_win: group(3)?,
    };

    let sum = percentages.sum();
    if sum != 100 {
        return Err(PredictError::PercentageSumInvalid { sum });
    }

    Ok(percentages)
}

/// First 120 characters of a completion, for logs
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 120;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any split summing to 100 round-trips through the grammar
        #[test]
        fn test_valid_split_accepted(home in 0u32..=100, draw_share in 0u32..=100) {
            let draw = draw_share.min(100 - home);
            let away = 100 - home - draw;
            let text = format!("HOME:{},DRAW:{},AWAY:{}", home, draw, away);

            let p = parse_completion(&text).unwrap();
            prop_assert_eq!(p, Percentages { home_win: home, draw, away_win: away });
        }

        /// Property: any split not summing to 100 is rejected
        #[test]
        fn test_invalid_sum_rejected(home in 0u32..1000, draw in 0u32..1000, away in 0u32..1000) {
            prop_assume!(home + draw + away != 100);
            let text = format!("HOME:{},DRAW:{},AWAY:{}", home, draw, away);

            let is_sum_error = matches!(
                parse_completion(&text),
                Err(PredictError::PercentageSumInvalid { .. })
            );
            prop_assert!(is_sum_error);
        }

        /// Property: text without the HOME token never parses
        #[test]
        fn test_text_without_token_rejected(text in "[a-z0-9 ,:.]{0,80}") {
            prop_assert!(parse_completion(&text).is_err());
        }
    }
}
