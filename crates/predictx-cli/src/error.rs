//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Team selection rejected before any request was made
    #[error("{0}")]
    InvalidInput(#[from] predictx_engine::InputError),

    /// Server answered with an error; the message is shown verbatim
    #[error("{0}")]
    Api(String),

    /// Server could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// Results view was asked to do something its state forbids
    #[error("{0}")]
    View(#[from] crate::view::ViewError),

    /// Team list could not be loaded
    #[error("Team list error: {0}")]
    Teams(#[from] predictx_domain::TeamCatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        CliError::Connection(e.to_string())
    }
}
