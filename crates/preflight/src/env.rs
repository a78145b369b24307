//! Read-only snapshot of the process environment
//!
//! The checks in this crate take an explicit [`EnvSnapshot`] instead of
//! reading `std::env` ambiently, so unit tests can build a snapshot from
//! plain pairs without mutating process state.

use std::collections::BTreeMap;

/// Immutable view of environment variables, captured once at startup
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Get the raw value of a variable, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether a variable is present with a non-empty value
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Truthy coercion for boolean-ish flags
    ///
    /// Only a trimmed, case-insensitive `"true"` counts as enabled; `"1"`,
    /// `"yes"` and friends do not. Matches the coercion the rest of the
    /// server applies to feature flags.
    #[must_use]
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_value_when_present() {
        let env: EnvSnapshot = [("JWT_SECRET", "abc")].into_iter().collect();
        assert_eq!(env.get("JWT_SECRET"), Some("abc"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn is_set_requires_non_empty_value() {
        let env: EnvSnapshot = [("A", "x"), ("B", "")].into_iter().collect();
        assert!(env.is_set("A"));
        assert!(!env.is_set("B"));
        assert!(!env.is_set("C"));
    }

    #[test]
    fn is_enabled_accepts_true_only() {
        let env: EnvSnapshot = [
            ("A", "true"),
            ("B", "TRUE"),
            ("C", "  true "),
            ("D", "1"),
            ("E", "yes"),
            ("F", "false"),
        ]
        .into_iter()
        .collect();

        assert!(env.is_enabled("A"));
        assert!(env.is_enabled("B"));
        assert!(env.is_enabled("C"));
        assert!(!env.is_enabled("D"));
        assert!(!env.is_enabled("E"));
        assert!(!env.is_enabled("F"));
        assert!(!env.is_enabled("MISSING"));
    }

    #[test]
    fn capture_reflects_process_environment() {
        // PATH is set in any reasonable test environment
        let env = EnvSnapshot::capture();
        assert!(env.get("PATH").is_some());
    }
}
