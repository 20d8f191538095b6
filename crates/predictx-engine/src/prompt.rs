//! LLM prompt engineering for match predictions

use crate::validator::ValidatedMatch;

/// Example completion shown to the model
pub const EXAMPLE_OUTPUT: &str = "HOME:41,DRAW:34,AWAY:25";

/// Builds the prediction prompt for one fixture
///
/// Pure string construction. Team names are interpolated verbatim, with
/// no escaping.
pub struct PromptBuilder<'a> {
    home_team: &'a str,
    away_team: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(home_team: &'a str, away_team: &'a str) -> Self {
        Self {
            home_team,
            away_team,
        }
    }

    /// Create a builder for a validated fixture
    pub fn for_match(fixture: &'a ValidatedMatch) -> Self {
        Self::new(fixture.home_team(), fixture.away_team())
    }

    /// Build the complete prediction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Persona and knowledge cutoff
        prompt.push_str(PERSONA);
        prompt.push_str("\n\n");

        // 2. The fixture
        prompt.push_str("Match:\n");
        prompt.push_str(&format!("Home Team: {}\n", self.home_team));
        prompt.push_str(&format!("Away Team: {}\n\n", self.away_team));

        // 3. Permitted reasoning factors
        prompt.push_str("Use only long-term, non-live factors such as:\n");
        for factor in FACTORS {
            prompt.push_str(&format!("- {}\n", factor));
        }
        prompt.push_str(EXCLUSIONS);
        prompt.push_str("\n\n");

        // 4. Output grammar
        prompt.push_str(OUTPUT_RULES);
        prompt.push_str("\n\n");

        // 5. One conforming example
        prompt.push_str("Example output:\n");
        prompt.push_str(EXAMPLE_OUTPUT);
        prompt.push('\n');

        prompt
    }
}

const PERSONA: &str = "You are an expert football analyst with knowledge up to Jan 2025.
Your task is to estimate win/draw probabilities using only stable, historical factors.";

const FACTORS: [&str; 5] = [
    "Historical head-to-head",
    "Long-term squad strength and depth",
    "Tactical identity and overall style",
    "Home advantage as a stable factor",
    "Historical consistency and performance patterns",
];

const EXCLUSIONS: &str = "Do NOT use live or current-form signals: no recent results, \
injuries, suspensions, transfers, odds, or news.";

const OUTPUT_RULES: &str = r#"Rules:
- Always give a prediction even if uncertain.
- Output must be EXACTLY in this format with NO extra text:
HOME:X,DRAW:Y,AWAY:Z
- X, Y, Z are integers.
- X + Y + Z = 100.
- No explanation, no commentary, no symbols."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::validate_teams;

    #[test]
    fn test_prompt_includes_teams() {
        let prompt = PromptBuilder::new("Arsenal", "Chelsea").build();
        assert!(prompt.contains("Home Team: Arsenal\n"));
        assert!(prompt.contains("Away Team: Chelsea\n"));
    }

    #[test]
    fn test_prompt_includes_persona_and_cutoff() {
        let prompt = PromptBuilder::new("Arsenal", "Chelsea").build();
        assert!(prompt.starts_with("You are an expert football analyst"));
        assert!(prompt.contains("knowledge up to Jan 2025"));
    }

    #[test]
    fn test_prompt_lists_all_factors() {
        let prompt = PromptBuilder::new("Arsenal", "Chelsea").build();
        for factor in FACTORS {
            assert!(prompt.contains(factor), "missing factor: {}", factor);
        }
        assert!(prompt.contains("Do NOT use live or current-form signals"));
    }

    #[test]
    fn test_prompt_mandates_grammar_and_example() {
        let prompt = PromptBuilder::new("Arsenal", "Chelsea").build();
        assert!(prompt.contains("HOME:X,DRAW:Y,AWAY:Z"));
        assert!(prompt.contains("X + Y + Z = 100"));
        assert!(prompt.trim_end().ends_with(EXAMPLE_OUTPUT));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = PromptBuilder::new("Real Madrid", "Barcelona").build();
        let b = PromptBuilder::new("Real Madrid", "Barcelona").build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_names_interpolated_verbatim() {
        let prompt = PromptBuilder::new("Brighton & Hove \"Albion\"", "{away}\nDRAW:99").build();
        assert!(prompt.contains("Home Team: Brighton & Hove \"Albion\"\n"));
        assert!(prompt.contains("Away Team: {away}\nDRAW:99\n"));
    }

    #[test]
    fn test_for_match() {
        let fixture = validate_teams("Celtic", "Rangers").unwrap();
        assert_eq!(
            PromptBuilder::for_match(&fixture).build(),
            PromptBuilder::new("Celtic", "Rangers").build()
        );
    }
}
