//! Health transport port
//!
//! Defines the interface for probing a single health target.

// Generated mock types don't carry docs or Debug impls
#![cfg_attr(test, allow(missing_docs, missing_debug_implementations))]

use crate::core::models::{HealthTarget, ProbeStatus};

/// Transport used to probe health targets
///
/// A check is infallible by contract: every transport-level failure is
/// folded into [`ProbeStatus::Unhealthy`] with a reason.
#[cfg_attr(test, mockall::automock)]
pub trait HealthTransport: Send + Sync {
    /// Probe one target once
    fn check(&self, target: &HealthTarget) -> ProbeStatus;
}
