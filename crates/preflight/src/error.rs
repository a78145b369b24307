//! Preflight errors

use thiserror::Error;

/// Errors that can occur while setting up diagnostics
///
/// The checks themselves are infallible; only loading the config file and
/// constructing the HTTP client can fail.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Custom configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
