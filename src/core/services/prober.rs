//! Health prober - aggregate health checks with bounded retries
//!
//! Reduces a set of health targets to a single boolean per attempt: true
//! only if every target reports healthy. Failures never short-circuit the
//! remaining targets within an attempt, so the log always carries complete
//! per-target information.

use std::time::Duration;

use log::{debug, info, warn};

use crate::core::models::{HealthTarget, ProbeStatus};
use crate::core::ports::HealthTransport;

/// Probe until healthy or the retry budget is exhausted
///
/// Makes at most `retries` attempts, sleeping `interval` between attempts
/// (never after the last one). Returns true as soon as one attempt sees
/// every target healthy.
#[must_use]
pub fn probe(
    transport: &dyn HealthTransport,
    targets: &[HealthTarget],
    retries: u32,
    interval: Duration,
) -> bool {
    probe_with(transport, targets, retries, interval, &mut |d| {
        std::thread::sleep(d);
    })
}

/// Probe one attempt: every target, no short-circuit
///
/// Returns the aggregate verdict for this attempt.
#[must_use]
pub fn probe_once(transport: &dyn HealthTransport, targets: &[HealthTarget]) -> bool {
    let mut all_healthy = true;
    for target in targets {
        match transport.check(target) {
            ProbeStatus::Healthy => debug!("{target}: healthy"),
            ProbeStatus::Unhealthy { reason } => {
                warn!("{target}: {reason}");
                all_healthy = false;
            },
        }
    }
    all_healthy
}

fn probe_with(
    transport: &dyn HealthTransport,
    targets: &[HealthTarget],
    retries: u32,
    interval: Duration,
    sleep: &mut dyn FnMut(Duration),
) -> bool {
    for attempt in 1..=retries {
        if probe_once(transport, targets) {
            info!("all {} target(s) healthy on attempt {attempt}", targets.len());
            return true;
        }
        if attempt < retries {
            debug!("attempt {attempt}/{retries} failed; retrying in {interval:?}");
            sleep(interval);
        }
    }
    false
}
