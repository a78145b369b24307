//! Secret and deprecated-key checks
//!
//! Flags template secrets still in use, two deprecated API-key variables,
//! and the insecure password-reset combination.

use crate::email::is_email_configured;
use crate::env::EnvSnapshot;
use crate::finding::Finding;
use crate::vars::SECRET_DEFAULTS;

const CREDS_GENERATOR_URL: &str = "https://quillchat.dev/toolkit/creds-generator";
const PASSWORD_RESET_DOCS_URL: &str =
    "https://quillchat.dev/docs/configuration/authentication/password-reset";

/// Check the environment for known-insecure defaults and deprecated keys
///
/// Emits one warning per secret variable whose live value equals the value
/// shipped in the example templates, plus a single aggregated notice when any
/// matched. Also flags the deprecated `GOOGLE_API_KEY` and
/// `OPENROUTER_API_KEY` variables and runs the password-reset safety check.
#[must_use]
pub fn check_secret_defaults(env: &EnvSnapshot) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut has_default_secrets = false;

    for secret in SECRET_DEFAULTS {
        if env.get(secret.key) == Some(secret.default_value) {
            findings.push(Finding::warning(
                "SEC001",
                format!("Default value for `{}` is being used", secret.key),
                "Replace it with a freshly generated secret",
            ));
            has_default_secrets = true;
        }
    }

    if has_default_secrets {
        findings.push(Finding::info(
            "SEC002",
            "Default secret values are in use",
            format!("Generate your own secret values: {CREDS_GENERATOR_URL}"),
        ));
    }

    if env.is_set("GOOGLE_API_KEY") {
        findings.push(Finding::warning(
            "DEP001",
            "The `GOOGLE_API_KEY` environment variable is deprecated",
            "Use the `GOOGLE_SEARCH_API_KEY` environment variable instead",
        ));
    }

    if env.is_set("OPENROUTER_API_KEY") {
        findings.push(Finding::warning(
            "DEP002",
            "The `OPENROUTER_API_KEY` environment variable is deprecated and its \
             functionality will be removed soon; it can lead to unexpected errors \
             when using custom endpoints",
            "Set up OpenRouter in the config file and use `OPENROUTER_KEY` or \
             another environment variable instead",
        ));
    }

    findings.extend(check_password_reset(env));

    findings
}

/// Flag password reset enabled without a configured email service
///
/// Advisory only: the server still starts in this configuration, reset links
/// are just issued insecurely.
fn check_password_reset(env: &EnvSnapshot) -> Option<Finding> {
    let email_enabled = is_email_configured(env);
    let reset_allowed = env.is_enabled("ALLOW_PASSWORD_RESET");

    (reset_allowed && !email_enabled).then(|| {
        Finding::critical(
            "SEC003",
            "Password reset is enabled with `ALLOW_PASSWORD_RESET` but no email \
             service is configured; reset links will be issued against any \
             recognized email address",
            format!("Configure an email service for secure password reset: {PASSWORD_RESET_DOCS_URL}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_CREDS_KEY: &str =
        "b460d9867a26d092464f58abd9970b6585c17bf350a9e21274296e8883fd0557";
    const DEFAULT_JWT_SECRET: &str =
        "115454fa6bb0c5e641008d4e9c14918cccf2514bd607d9697229d1f8a6a501c1";

    fn secret_warnings(findings: &[Finding]) -> Vec<&Finding> {
        findings.iter().filter(|f| f.code == "SEC001").collect()
    }

    #[test]
    fn default_secret_produces_one_warning_naming_the_variable() {
        let env: EnvSnapshot = [("CREDS_KEY", DEFAULT_CREDS_KEY)].into_iter().collect();

        let findings = check_secret_defaults(&env);

        let warnings = secret_warnings(&findings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("CREDS_KEY"));
    }

    #[test]
    fn multiple_default_secrets_each_produce_a_warning() {
        let env: EnvSnapshot = [
            ("CREDS_KEY", DEFAULT_CREDS_KEY),
            ("JWT_SECRET", DEFAULT_JWT_SECRET),
        ]
        .into_iter()
        .collect();

        let findings = check_secret_defaults(&env);

        assert_eq!(secret_warnings(&findings).len(), 2);
    }

    #[test]
    fn default_secret_adds_single_aggregated_notice() {
        let env: EnvSnapshot = [
            ("CREDS_KEY", DEFAULT_CREDS_KEY),
            ("JWT_SECRET", DEFAULT_JWT_SECRET),
        ]
        .into_iter()
        .collect();

        let findings = check_secret_defaults(&env);

        let notices: Vec<_> = findings.iter().filter(|f| f.code == "SEC002").collect();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].recommendation.contains("creds-generator"));
    }

    #[test]
    fn custom_secret_values_produce_no_findings() {
        let env: EnvSnapshot = [("CREDS_KEY", "my-own-value"), ("JWT_SECRET", "another")]
            .into_iter()
            .collect();

        let findings = check_secret_defaults(&env);

        assert!(findings.is_empty());
    }

    #[test]
    fn unset_secrets_produce_no_findings() {
        let findings = check_secret_defaults(&EnvSnapshot::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn google_api_key_set_warns_with_replacement() {
        let env: EnvSnapshot = [("GOOGLE_API_KEY", "AIza...")].into_iter().collect();

        let findings = check_secret_defaults(&env);

        let deprecations: Vec<_> = findings.iter().filter(|f| f.code == "DEP001").collect();
        assert_eq!(deprecations.len(), 1);
        assert!(deprecations[0].recommendation.contains("GOOGLE_SEARCH_API_KEY"));
    }

    #[test]
    fn google_api_key_unset_does_not_warn() {
        let findings = check_secret_defaults(&EnvSnapshot::default());
        assert!(!findings.iter().any(|f| f.code == "DEP001"));
    }

    #[test]
    fn openrouter_api_key_set_warns_strongly() {
        let env: EnvSnapshot = [("OPENROUTER_API_KEY", "sk-or-...")].into_iter().collect();

        let findings = check_secret_defaults(&env);

        let deprecations: Vec<_> = findings.iter().filter(|f| f.code == "DEP002").collect();
        assert_eq!(deprecations.len(), 1);
        assert!(deprecations[0].message.contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn reset_enabled_without_email_is_critical() {
        let env: EnvSnapshot = [("ALLOW_PASSWORD_RESET", "true")].into_iter().collect();

        let findings = check_secret_defaults(&env);

        let critical: Vec<_> = findings.iter().filter(|f| f.code == "SEC003").collect();
        assert_eq!(critical.len(), 1);
        assert!(critical[0].is_critical());
    }

    #[test]
    fn reset_enabled_with_email_configured_is_fine() {
        let env: EnvSnapshot = [
            ("ALLOW_PASSWORD_RESET", "true"),
            ("EMAIL_SERVICE", "gmail"),
            ("EMAIL_USERNAME", "ops@example.com"),
            ("EMAIL_PASSWORD", "hunter2"),
            ("EMAIL_FROM", "noreply@example.com"),
        ]
        .into_iter()
        .collect();

        let findings = check_secret_defaults(&env);

        assert!(!findings.iter().any(|f| f.code == "SEC003"));
    }

    #[test]
    fn reset_disabled_without_email_is_fine() {
        let env: EnvSnapshot = [("ALLOW_PASSWORD_RESET", "false")].into_iter().collect();
        assert!(!check_secret_defaults(&env).iter().any(|f| f.code == "SEC003"));
    }

    #[test]
    fn reset_flag_absent_is_fine() {
        let findings = check_secret_defaults(&EnvSnapshot::default());
        assert!(!findings.iter().any(|f| f.code == "SEC003"));
    }
}
