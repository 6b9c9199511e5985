//! Per-target probe status

use serde::Serialize;

/// Result of probing a single health target once
///
/// Network-level failures of any kind (refused connection, DNS, timeout,
/// malformed response) collapse into `Unhealthy` with a reason; a probe
/// never produces a fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeStatus {
    /// The target responded with a 2xx status within the timeout
    Healthy,
    /// Non-success status, timeout, or any transport error
    Unhealthy {
        /// What went wrong, for the log and for `check` output
        reason: String,
    },
}

impl ProbeStatus {
    /// Whether this status counts toward a healthy aggregate
    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Unhealthy status with a reason
    #[must_use]
    pub fn unhealthy(reason: impl Into<String>) -> Self {
        Self::Unhealthy {
            reason: reason.into(),
        }
    }
}
