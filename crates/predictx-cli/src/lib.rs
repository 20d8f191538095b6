//! PredictX CLI library.
//!
//! Terminal client for the prediction server: team autocomplete, a
//! single-shot prediction request, and result rendering.

pub mod cli;
pub mod client;
pub mod commands;
pub mod error;
pub mod output;
pub mod view;

pub use cli::{Cli, Command};
pub use client::PredictClient;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use view::{FetchState, ResultsView};
