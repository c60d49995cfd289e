//! HTTP client library for the MoneyForward mobile API.
//!
//! This crate provides a typed client for the undocumented API used by the
//! MoneyForward ME iOS app. Requests are authenticated with the `Cookie`
//! header of a logged-in browser session; obtaining that cookie is up to the
//! caller.
//!
//! # Example
//!
//! ```no_run
//! use moneyforward_client::{MoneyForwardClient, UserAssetActsParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), moneyforward_client::Error> {
//!     let client = MoneyForwardClient::with_cookie("_moneybook_session=...")?;
//!
//!     let summaries = client.get_account_summaries().await?;
//!     for account in &summaries.accounts {
//!         println!("{}: {}", account.name, account.amount);
//!     }
//!
//!     let acts = client
//!         .get_user_asset_activities(UserAssetActsParams::new().size(32))
//!         .await?;
//!     println!("{} activities", acts.user_asset_acts.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{
    ClientConfig, DEFAULT_BASE_URL, MOBILE_USER_AGENT, MoneyForwardClient, RequestOption,
};
pub use error::{Error, SchemaError};
pub use reqwest::Method;
pub use types::*;
