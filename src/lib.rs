//! # MoneyForward CLI
//!
//! Command-line front end for the MoneyForward mobile API, built on
//! [`moneyforward_client`].
//!
//! The session cookie of a logged-in browser or app session is read from
//! `--cookie`, the `MONEYFORWARD_COOKIE` environment variable, or the
//! `[client]` table of a TOML configuration file, in that order.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cli`] | Command-line arguments |
//! | [`commands`] | Dispatch of commands to API calls |
//! | [`config`] | TOML configuration |
//! | [`error`] | Command error types and exit codes |
//! | [`render`] | Plain-text output |
//!
//! ## Example
//!
//! ```text
//! export MONEYFORWARD_COOKIE='_moneybook_session=...'
//! moneyforward accounts
//! moneyforward activities --size 32
//! moneyforward cash-flow --account <hash> --from 2025-01-01 --to 2025-01-31
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
