//! RAG API liveness probe
//!
//! A single `GET {base_url}/health` at startup. The outcome only ever feeds
//! the log: the probe has no retries, never fails the caller, and file
//! uploads degrade gracefully when the service is down.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::error::PreflightError;

/// Default bound on the probe request
///
/// The request is bounded so a black-holed RAG endpoint cannot stall startup
/// diagnostics indefinitely.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of probing the RAG API health endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RagProbeOutcome {
    /// The service answered 200
    Reachable,
    /// The service answered, but not with 200
    Degraded(StatusCode),
    /// No usable response: connect failure, DNS failure, or timeout
    Unreachable(String),
}

/// Liveness probe for the auxiliary RAG service
#[derive(Debug, Clone)]
pub struct RagHealthProbe {
    base_url: String,
    client: Client,
}

impl RagHealthProbe {
    /// Create a probe for the given base URL with a bounded request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PreflightError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// The base URL this probe targets
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue the health request once
    ///
    /// Infallible by contract: every failure class is folded into
    /// [`RagProbeOutcome::Unreachable`].
    pub async fn probe(&self) -> RagProbeOutcome {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => RagProbeOutcome::Reachable,
            Ok(response) => RagProbeOutcome::Degraded(response.status()),
            Err(err) => RagProbeOutcome::Unreachable(err.to_string()),
        }
    }
}

/// Convert a probe outcome into log output
///
/// `Degraded` intentionally emits no info or warning line, matching the
/// long-standing behavior operators rely on; a debug line is left for anyone
/// tracing the probe itself.
pub fn log_probe_outcome(outcome: &RagProbeOutcome, base_url: &str) {
    match outcome {
        RagProbeOutcome::Reachable => {
            info!(url = %base_url, "RAG API is running and reachable");
        },
        RagProbeOutcome::Degraded(status) => {
            debug!(url = %base_url, status = %status, "RAG API health endpoint answered non-200");
        },
        RagProbeOutcome::Unreachable(reason) => {
            warn!(
                url = %base_url,
                reason = %reason,
                "RAG API is either not running or not reachable; file uploads may fail"
            );
        },
    }
}
