//! Command execution.

use crate::cli::{PredictArgs, TeamsArgs};
use crate::client::PredictClient;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::view::{FetchState, ResultsView};
use predictx_domain::TeamCatalog;
use tracing::info;

/// Print autocomplete suggestions for a partial team name.
pub fn execute_teams(args: TeamsArgs, catalog: &TeamCatalog, formatter: &Formatter) -> Result<()> {
    let matches = catalog.search(&args.query);
    println!("{}", formatter.format_teams(&args.query, &matches)?);
    Ok(())
}

/// Request and print a prediction for one fixture.
///
/// Issues exactly one request. A failure is reported, not retried.
pub async fn execute_predict(
    args: PredictArgs,
    catalog: &TeamCatalog,
    formatter: &Formatter,
) -> Result<()> {
    let mut view = ResultsView::open(&args.home, &args.away)?;

    for team in [&args.home, &args.away] {
        if !catalog.contains(team) {
            eprintln!(
                "{}",
                formatter.warning(&format!("'{}' is not in the team list", team))
            );
        }
    }

    let client = PredictClient::new(&args.server);
    info!(
        "Requesting prediction for {} vs {}",
        view.fixture().home_team(),
        view.fixture().away_team()
    );

    let state = view
        .load(|request| async move { client.predict(&request).await })
        .await?;

    match state {
        FetchState::Succeeded(prediction) => {
            println!("{}", formatter.format_prediction(prediction)?);
            Ok(())
        }
        FetchState::Failed(message) => Err(CliError::Api(message.clone())),
        FetchState::Idle | FetchState::Fetching => {
            Err(CliError::Api(crate::client::FALLBACK_ERROR.to_string()))
        }
    }
}
