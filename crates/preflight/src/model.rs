//! Custom configuration model
//!
//! Only the slice of the operator-provided config file that the startup
//! checks care about. The full schema is owned by the config-loading
//! subsystem; unknown fields are ignored on purpose.

use serde::{Deserialize, Serialize};

use crate::error::PreflightError;

/// Operator-provided custom configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Config schema version declared by the file
    #[serde(default)]
    pub version: String,
}

impl CustomConfig {
    /// Load the custom configuration from a file, with `QUILLCHAT_`
    /// environment overrides
    ///
    /// Returns `Ok(None)` when the file does not exist; a missing config is
    /// not an error for diagnostics purposes.
    pub fn load(path: &str) -> Result<Option<Self>, PreflightError> {
        let path = std::path::Path::new(path);
        if !path.exists() {
            return Ok(None);
        }

        let builder = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("QUILLCHAT")
                    .separator("_")
                    .try_parsing(true),
            );

        let loaded = builder.build()?;
        Ok(Some(loaded.try_deserialize()?))
    }
}
