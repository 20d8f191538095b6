//! PredictX Domain Layer
//!
//! The transient data model shared by the prediction endpoint and its
//! clients, plus the trait seam behind which the generation service lives.
//!
//! ## Key Concepts
//!
//! - **PredictionRequest**: the two team names a user picked
//! - **PredictionResponse**: a home/draw/away split that always sums to 100
//! - **TeamCatalog**: read-only reference list backing autocomplete
//! - **LlmProvider**: the opaque text-generation capability
//!
//! Nothing here is persisted. Every value lives for one request/response cycle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod outcome;
pub mod prediction;
pub mod teams;
pub mod traits;

// Re-exports for convenience
pub use outcome::Outcome;
pub use prediction::{ErrorResponse, PredictionRequest, PredictionResponse};
pub use teams::{TeamCatalog, TeamCatalogError, AUTOCOMPLETE_LIMIT};
