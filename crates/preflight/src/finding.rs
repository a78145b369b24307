//! Startup findings with severity levels
//!
//! Every check in this crate returns findings as plain values; logging happens
//! once, at the boundary, in [`log_findings`]. Tests assert on the returned
//! values and never need to capture log output.

use std::fmt;

/// Severity level for a startup finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational - no action required
    Info,
    /// Warning - should be addressed but not critical
    Warning,
    /// Critical - insecure setup, must be addressed before going live
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A single startup diagnostic finding
#[derive(Debug, Clone)]
pub struct Finding {
    /// Severity level of the finding
    pub severity: Severity,
    /// Short code identifying the finding type
    pub code: String,
    /// Human-readable description of the issue
    pub message: String,
    /// Recommended action to resolve the issue
    pub recommendation: String,
}

impl Finding {
    /// Create a new finding
    #[must_use]
    pub fn new(
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }

    /// Create a critical finding
    #[must_use]
    pub fn critical(
        code: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Critical, code, message, recommendation)
    }

    /// Create a warning-level finding
    #[must_use]
    pub fn warning(
        code: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, code, message, recommendation)
    }

    /// Create an informational notice
    #[must_use]
    pub fn info(
        code: impl Into<String>,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Info, code, message, recommendation)
    }

    /// Check if this finding is critical
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, Severity::Critical)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.severity, self.code, self.message, self.recommendation
        )
    }
}

/// Log all findings using tracing
///
/// Findings never block startup; they are emitted at the level matching their
/// severity and the caller proceeds regardless.
pub fn log_findings(findings: &[Finding]) {
    for finding in findings {
        match finding.severity {
            Severity::Critical => {
                tracing::error!(
                    code = %finding.code,
                    message = %finding.message,
                    recommendation = %finding.recommendation,
                    "Startup configuration issue"
                );
            },
            Severity::Warning => {
                tracing::warn!(
                    code = %finding.code,
                    message = %finding.message,
                    recommendation = %finding.recommendation,
                    "Startup configuration warning"
                );
            },
            Severity::Info => {
                tracing::info!(
                    code = %finding.code,
                    message = %finding.message,
                    recommendation = %finding.recommendation,
                    "Startup configuration notice"
                );
            },
        }
    }
}
