//! Static team catalog and autocomplete filtering
//!
//! The catalog is reference data only: an ordered list of names, read once
//! and never mutated. Duplicates are harmless.

use std::sync::LazyLock;
use thiserror::Error;

/// Maximum number of autocomplete suggestions
pub const AUTOCOMPLETE_LIMIT: usize = 8;

/// Errors loading a catalog from an external source
#[derive(Debug, Error)]
pub enum TeamCatalogError {
    /// Source was not a JSON array of strings
    #[error("Invalid team list: {0}")]
    InvalidFormat(#[from] serde_json::Error),

    /// Source contained no usable names
    #[error("Team list is empty")]
    Empty,
}

/// Ordered, read-only list of team names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCatalog {
    teams: Vec<String>,
}

static BUILTIN: LazyLock<TeamCatalog> = LazyLock::new(|| TeamCatalog {
    teams: BUILTIN_TEAMS.iter().map(|t| t.to_string()).collect(),
});

impl TeamCatalog {
    /// Create a catalog from names, dropping blank entries
    pub fn new<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.trim().is_empty())
                .collect(),
        }
    }

    /// The bundled catalog, built once per process
    pub fn builtin() -> &'static TeamCatalog {
        &BUILTIN
    }

    /// Parse a catalog from a JSON array of strings
    pub fn from_json(json: &str) -> Result<Self, TeamCatalogError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        let catalog = Self::new(names);
        if catalog.is_empty() {
            return Err(TeamCatalogError::Empty);
        }
        Ok(catalog)
    }

    /// All names, in catalog order
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Number of names
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// True when the catalog holds no names
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Whether `name` appears in the catalog exactly
    pub fn contains(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    /// Autocomplete suggestions for `query`
    ///
    /// Case-insensitive substring match in catalog order, capped at
    /// [`AUTOCOMPLETE_LIMIT`]. An empty query suggests nothing.
    pub fn search(&self, query: &str) -> Vec<&str> {
        self.search_with_limit(query, AUTOCOMPLETE_LIMIT)
    }

    /// Same as [`search`](Self::search) with an explicit cap
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<&str> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.teams
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .map(String::as_str)
            .take(limit)
            .collect()
    }
}

const BUILTIN_TEAMS: &[&str] = &[
    // England
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton & Hove Albion",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Newcastle United",
    "Nottingham Forest",
    "Tottenham Hotspur",
    "West Ham United",
    "Wolverhampton Wanderers",
    // Spain
    "Real Madrid",
    "Barcelona",
    "Atletico Madrid",
    "Athletic Bilbao",
    "Real Sociedad",
    "Real Betis",
    "Real Valladolid",
    "Real Mallorca",
    "Sevilla",
    "Valencia",
    "Villarreal",
    "Girona",
    // Italy
    "Inter Milan",
    "AC Milan",
    "Juventus",
    "Napoli",
    "AS Roma",
    "Lazio",
    "Atalanta",
    "Fiorentina",
    "Bologna",
    // Germany
    "Bayern Munich",
    "Borussia Dortmund",
    "Bayer Leverkusen",
    "RB Leipzig",
    "Eintracht Frankfurt",
    "VfB Stuttgart",
    "Borussia Monchengladbach",
    // France
    "Paris Saint-Germain",
    "Olympique de Marseille",
    "Olympique Lyonnais",
    "AS Monaco",
    "LOSC Lille",
    // Elsewhere in Europe
    "Ajax",
    "PSV Eindhoven",
    "Feyenoord",
    "Benfica",
    "FC Porto",
    "Sporting CP",
    "Celtic",
    "Rangers",
    "Galatasaray",
    "Fenerbahce",
    "Club Brugge",
    "Red Bull Salzburg",
    "Shakhtar Donetsk",
    // National teams
    "Argentina",
    "Brazil",
    "England",
    "France",
    "Germany",
    "Italy",
    "Netherlands",
    "Portugal",
    "Spain",
    "Belgium",
    "Croatia",
    "Uruguay",
];
