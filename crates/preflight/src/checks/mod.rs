//! Startup checks
//!
//! Split by subject:
//! - `secrets`: template secrets, deprecated key flags, password-reset safety
//! - `azure`: deprecated/conflicting variables for the azureOpenAI endpoint
//! - `version`: config schema version advisory

mod azure;
mod secrets;
mod version;

pub use azure::check_azure_variables;
pub use secrets::check_secret_defaults;
pub use version::check_config_version;

use crate::env::EnvSnapshot;
use crate::finding::Finding;
use crate::model::CustomConfig;

/// Run every synchronous startup check and collect the findings
///
/// The RAG liveness probe is async and stays separate; see
/// [`crate::RagHealthProbe`].
#[must_use]
pub fn run_startup_checks(env: &EnvSnapshot, config: Option<&CustomConfig>) -> Vec<Finding> {
    let mut findings = check_secret_defaults(env);
    findings.extend(check_azure_variables(env));
    if let Some(config) = config {
        findings.extend(check_config_version(config));
    }
    findings
}
