//! Live integration tests for the MoneyForward mobile API.
//!
//! These tests talk to the real service and need a logged-in session. Set
//! `MONEYFORWARD_COOKIE` to the raw `Cookie` header of that session; without
//! it every test returns early. `MONEYFORWARD_BASE_URL` overrides the origin.

use moneyforward_client::{ClientConfig, DEFAULT_BASE_URL, MoneyForwardClient};
use std::time::Duration;

/// Gets the API base URL from environment or uses the production origin.
#[must_use]
pub fn get_api_url() -> String {
    std::env::var("MONEYFORWARD_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Gets the session cookie from environment, if set and non-empty.
#[must_use]
pub fn get_cookie() -> Option<String> {
    std::env::var("MONEYFORWARD_COOKIE")
        .ok()
        .filter(|c| !c.trim().is_empty())
}

/// Creates a test client, or `None` when no session cookie is configured.
///
/// # Panics
/// Panics if the client cannot be built from the environment.
#[must_use]
pub fn create_test_client() -> Option<MoneyForwardClient> {
    let Some(cookie) = get_cookie() else {
        eprintln!("MONEYFORWARD_COOKIE not set, skipping");
        return None;
    };
    let client = MoneyForwardClient::new(ClientConfig {
        base_url: get_api_url(),
        cookie,
        timeout: Duration::from_secs(30),
        headers: Vec::new(),
    })
    .expect("Failed to create client");
    Some(client)
}
