//! Startup diagnostics for the Quillchat server
//!
//! Inspects the process environment and the loaded custom configuration at
//! startup and logs advisory findings: default template secrets still in use,
//! deprecated or conflicting environment variables, an outdated config schema
//! version, and an insecure password-reset setup. Also probes the RAG API for
//! liveness.
//!
//! Every check is advisory. Nothing in this crate terminates the process or
//! returns an error the caller is expected to act on; the observable effect
//! is log output through `tracing`.

mod checks;
mod email;
mod env;
mod error;
mod finding;
mod health;
mod model;
mod vars;

pub use checks::{
    check_azure_variables, check_config_version, check_secret_defaults, run_startup_checks,
};
pub use email::is_email_configured;
pub use env::EnvSnapshot;
pub use error::PreflightError;
pub use finding::{Finding, Severity, log_findings};
pub use health::{DEFAULT_PROBE_TIMEOUT, RagHealthProbe, RagProbeOutcome, log_probe_outcome};
pub use model::CustomConfig;
pub use vars::{
    CONFIG_VERSION, CONFLICTING_AZURE_VARIABLES, DEPRECATED_AZURE_VARIABLES, SECRET_DEFAULTS,
    SecretDefault, VariableDescriptor,
};
