//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use moneyforward_client::UserAssetActsParams;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moneyforward")]
#[command(about = "Query accounts and transactions through the MoneyForward mobile API")]
pub struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "MONEYFORWARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session cookie (also read from `MONEYFORWARD_COOKIE`).
    #[arg(long, env = "MONEYFORWARD_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Override the API base URL.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the decoded response as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List linked accounts with their sub-accounts.
    Accounts,
    /// Show one account through its show path.
    Account {
        /// Show path from `accounts --json`, e.g. `sp2/accounts/<hash>`.
        show_path: String,
    },
    /// Show the detail view of an account or sub-account.
    Detail {
        account_id_hash: String,
        #[arg(long)]
        sub_account: Option<String>,
    },
    /// List recent asset activities.
    Activities(ActivitiesArgs),
    /// Show a single activity.
    Activity { id: String },
    /// Show cash-flow records for a date range.
    CashFlow(CashFlowArgs),
    /// Show the home timeline.
    Timeline {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// List services recommended for linking.
    Transactions,
    /// Refresh all linked accounts.
    ForceUpdate,
    /// Queue an aggregation run for one account.
    Aggregate { account_id_hash: String },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesArgs {
    #[arg(long)]
    pub offset: Option<u32>,
    #[arg(long)]
    pub size: Option<u32>,
    /// Include older records.
    #[arg(long)]
    pub old: bool,
    /// Exclude new records.
    #[arg(long)]
    pub no_new: bool,
    /// Do not continue from the previous page.
    #[arg(long)]
    pub no_continuous: bool,
}

impl ActivitiesArgs {
    /// Converts flags to request parameters; absent flags keep upstream defaults.
    #[must_use]
    pub fn params(&self) -> UserAssetActsParams {
        UserAssetActsParams {
            is_old: self.old.then_some(true),
            is_new: self.no_new.then_some(false),
            is_continuous: self.no_continuous.then_some(false),
            offset: self.offset,
            size: self.size,
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CashFlowArgs {
    /// Account ID hash.
    #[arg(long, conflicts_with = "sub_account", required_unless_present = "sub_account")]
    pub account: Option<String>,
    /// Sub-account ID hash.
    #[arg(long)]
    pub sub_account: Option<String>,
    /// Start date, `YYYY-MM-DD`.
    #[arg(long)]
    pub from: String,
    /// End date, `YYYY-MM-DD`.
    #[arg(long)]
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("moneyforward").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_activities_defaults() {
        let cli = parse(&["activities"]).unwrap();
        let Command::Activities(args) = cli.command else {
            panic!("expected activities");
        };

        assert_eq!(args.params(), UserAssetActsParams::default());
    }

    #[test]
    fn test_parse_activities_flags() {
        let cli = parse(&["activities", "--old", "--no-new", "--size", "5"]).unwrap();
        let Command::Activities(args) = cli.command else {
            panic!("expected activities");
        };

        let params = args.params();
        assert_eq!(params.is_old, Some(true));
        assert_eq!(params.is_new, Some(false));
        assert_eq!(params.is_continuous, None);
        assert_eq!(params.size, Some(5));
    }

    #[test]
    fn test_parse_timeline_default_limit() {
        let cli = parse(&["timeline"]).unwrap();
        assert_eq!(cli.command, Command::Timeline { limit: 10 });
    }

    #[test]
    fn test_parse_global_json_flag() {
        let cli = parse(&["accounts", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.command, Command::Accounts);
    }

    #[test]
    fn test_cash_flow_requires_a_target() {
        assert!(parse(&["cash-flow", "--from", "2025-01-01", "--to", "2025-01-31"]).is_err());
        assert!(
            parse(&[
                "cash-flow",
                "--account",
                "a",
                "--sub-account",
                "b",
                "--from",
                "2025-01-01",
                "--to",
                "2025-01-31"
            ])
            .is_err()
        );
        assert!(
            parse(&[
                "cash-flow",
                "--sub-account",
                "b",
                "--from",
                "2025-01-01",
                "--to",
                "2025-01-31"
            ])
            .is_ok()
        );
    }
}
