//! Command execution.
//!
//! Every command performs one API call and returns the text to print, either
//! rendered for a terminal or as pretty JSON.

use crate::cli::{CashFlowArgs, Cli, Command};
use crate::config::Config;
use crate::error::CliError;
use crate::render;
use moneyforward_client::{MoneyForwardClient, ShowPath};
use serde::Serialize;
use tracing::{debug, info, warn};


fn output<T: Serialize>(value: &T, json: bool, text: fn(&T) -> String) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

/// Loads the configuration, builds the client and runs the parsed command.
///
/// # Errors
/// Returns [`CliError::Config`] if the configuration file cannot be loaded,
/// [`CliError::Client`] if the client cannot be built or the API call fails.
pub async fn execute(cli: Cli) -> Result<String, CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let client_config = config
        .client
        .to_client_config(cli.cookie.as_deref(), cli.base_url.as_deref());

    if client_config.cookie.is_empty() {
        warn!("no session cookie configured; requests will be unauthenticated");
    }
    debug!(base_url = %client_config.base_url, "client configured");

    let client = MoneyForwardClient::new(client_config)?;
    run(&client, cli.command, cli.json).await
}

/// Runs a command against the API.
///
/// # Errors
/// Returns [`CliError::Client`] if the API call fails and [`CliError::Usage`]
/// for argument combinations the parser cannot rule out.
pub async fn run(
    client: &MoneyForwardClient,
    command: Command,
    json: bool,
) -> Result<String, CliError> {
    match command {
        Command::Accounts => {
            let response = client.get_account_summaries().await?;
            output(&response, json, render::accounts)
        }
        Command::Account { show_path } => {
            let response = client.get_account(&ShowPath(show_path)).await?;
            output(&response, json, render::account)
        }
        Command::Detail {
            account_id_hash,
            sub_account,
        } => {
            let response = match sub_account {
                Some(sub) => client.get_sub_account_detail(&account_id_hash, &sub).await?,
                None => client.get_account_detail(&account_id_hash).await?,
            };
            output(&response, json, render::account_detail)
        }
        Command::Activities(args) => {
            let response = client.get_user_asset_activities(args.params()).await?;
            output(&response, json, render::activities)
        }
        Command::Activity { id } => {
            let response = client.get_user_asset_activity(&id).await?;
            if json {
                Ok(serde_json::to_string_pretty(&response)?)
            } else {
                Ok(render::activity(&response.user_asset_act))
            }
        }
        Command::CashFlow(args) => cash_flow(client, args, json).await,
        Command::Timeline { limit } => {
            let response = client.get_home_timeline(limit).await?;
            output(&response, json, render::timeline)
        }
        Command::Transactions => {
            let response = client.get_transactions().await?;
            output(&response, json, render::transactions)
        }
        Command::ForceUpdate => {
            client.force_update().await?;
            info!("force update requested");
            Ok("Update requested for all accounts".to_string())
        }
        Command::Aggregate { account_id_hash } => {
            client.trigger_account_aggregation(&account_id_hash).await?;
            info!(account = %account_id_hash, "aggregation queued");
            Ok(format!("Aggregation queued for {}", account_id_hash))
        }
    }
}

async fn cash_flow(
    client: &MoneyForwardClient,
    args: CashFlowArgs,
    json: bool,
) -> Result<String, CliError> {
    let response = match (args.account, args.sub_account) {
        (Some(account), None) => {
            client
                .get_account_cash_flow_term_data(&account, &args.from, &args.to)
                .await?
        }
        (None, Some(sub)) => {
            client
                .get_sub_account_cash_flow_term_data(&sub, &args.from, &args.to)
                .await?
        }
        _ => {
            return Err(CliError::Usage(
                "exactly one of --account or --sub-account is required".to_string(),
            ));
        }
    };
    output(&response, json, render::cash_flow)
}
