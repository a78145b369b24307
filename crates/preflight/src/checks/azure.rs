//! Azure endpoint variable checks
//!
//! The `azureOpenAI` endpoint is configured through the config file; the old
//! per-variable setup either conflicts with it or is silently ignored. Both
//! descriptor lists come from [`crate::vars`] and are walked in table order.

use crate::env::EnvSnapshot;
use crate::finding::Finding;
use crate::vars::{CONFLICTING_AZURE_VARIABLES, DEPRECATED_AZURE_VARIABLES};

/// Warn about deprecated and conflicting Azure variables still present in
/// the environment
#[must_use]
pub fn check_azure_variables(env: &EnvSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();

    for descriptor in DEPRECATED_AZURE_VARIABLES {
        if env.is_set(descriptor.key) {
            findings.push(Finding::warning(
                "AZR001",
                format!(
                    "The `{}` environment variable (related to {}) should not be \
                     used in combination with the `azureOpenAI` endpoint \
                     configuration; expect conflicts and errors",
                    descriptor.key, descriptor.description
                ),
                "Move this setting into the azureOpenAI endpoint configuration",
            ));
        }
    }

    for key in CONFLICTING_AZURE_VARIABLES {
        if env.is_set(key) {
            findings.push(Finding::warning(
                "AZR002",
                format!(
                    "The `{key}` environment variable conflicts with the \
                     `azureOpenAI` endpoint's model-group placeholder mapping"
                ),
                "Remove it and rely on the endpoint configuration",
            ));
        }
    }

    findings
}
