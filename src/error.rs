//! Error types for the command-line front end.

use crate::config::ConfigError;


/// Command error types.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Client(#[from] moneyforward_client::Error),

    /// Output could not be serialized.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid combination of arguments.
    #[error("Invalid arguments: {0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Config(_) => 3,
            Self::Client(moneyforward_client::Error::Api { status: 401 | 403, .. }) => 4,
            Self::Client(_) | Self::Json(_) => 1,
        }
    }
}
