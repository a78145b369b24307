//! Email delivery configuration check
//!
//! Mirrors the contract the mailer subsystem applies: a transport (either a
//! well-known service or an SMTP host) plus full credentials and a sender
//! address. Used by the password-reset safety check.

use crate::env::EnvSnapshot;

/// Whether outbound email delivery is configured
///
/// Requires `EMAIL_SERVICE` or `EMAIL_HOST`, plus `EMAIL_USERNAME`,
/// `EMAIL_PASSWORD` and `EMAIL_FROM`, all non-empty.
#[must_use]
pub fn is_email_configured(env: &EnvSnapshot) -> bool {
    (env.is_set("EMAIL_SERVICE") || env.is_set("EMAIL_HOST"))
        && env.is_set("EMAIL_USERNAME")
        && env.is_set("EMAIL_PASSWORD")
        && env.is_set("EMAIL_FROM")
}
