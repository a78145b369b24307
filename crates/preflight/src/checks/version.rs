//! Config schema version advisory

use crate::finding::Finding;
use crate::model::CustomConfig;
use crate::vars::CONFIG_VERSION;

const CHANGELOG_URL: &str = "https://quillchat.dev/changelog";

/// Compare the declared config version against the current schema version
///
/// Exact string equality, not a semver comparison: any other value, including
/// a missing one, is reported. Advisory only; the config is used as-is.
#[must_use]
pub fn check_config_version(config: &CustomConfig) -> Option<Finding> {
    (config.version != CONFIG_VERSION).then(|| {
        let declared = if config.version.is_empty() {
            "unset"
        } else {
            config.version.as_str()
        };
        Finding::info(
            "CFG001",
            format!(
                "Outdated config version: {declared}; latest version: {CONFIG_VERSION}"
            ),
            format!("Check the config changelog for new options and features: {CHANGELOG_URL}"),
        )
    })
}
