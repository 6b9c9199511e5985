//! HTTP health probe adapter
//!
//! Blocking requests with a short fixed timeout. The watchdog is
//! deliberately synchronous; per-request timeouts bound how long a single
//! hung target can stall an attempt.

use std::time::Duration;

use crate::core::models::{HealthTarget, ProbeStatus};
use crate::core::ports::HealthTransport;

/// Health transport backed by a blocking HTTP client
#[derive(Debug)]
pub struct HttpHealthTransport {
    client: reqwest::blocking::Client,
}

impl HttpHealthTransport {
    /// Create a transport with the given per-request timeout
    ///
    /// The timeout covers the whole request, connect included.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl HealthTransport for HttpHealthTransport {
    fn check(&self, target: &HealthTarget) -> ProbeStatus {
        match self.client.get(target.url()).send() {
            Ok(response) if response.status().is_success() => ProbeStatus::Healthy,
            Ok(response) => ProbeStatus::unhealthy(format!("status {}", response.status())),
            Err(err) => ProbeStatus::unhealthy(err.to_string()),
        }
    }
}
