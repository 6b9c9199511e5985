//! Probe-only health check

use crate::adapters::http::HttpHealthTransport;
use crate::cli::app::CheckArgs;
use crate::config::{Config, Overrides};
use crate::core::models::ProbeStatus;
use crate::core::ports::HealthTransport;
use crate::output::{OutputMode, ProbeReport, TargetReport};

/// Probe each target once and report, without touching the repository
///
/// Exit code 0 when every target is healthy, 1 otherwise.
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<u8> {
    let overrides = Overrides {
        urls: args.urls.clone(),
        probe_timeout_secs: args.probe_timeout,
        ..Overrides::default()
    };
    let config = Config::load(&args.repo, overrides)?;

    let transport = HttpHealthTransport::new(config.probe_timeout())?;

    let targets: Vec<TargetReport> = config
        .targets
        .iter()
        .map(|target| match transport.check(target) {
            ProbeStatus::Healthy => TargetReport {
                url: target.url().to_string(),
                healthy: true,
                reason: None,
            },
            ProbeStatus::Unhealthy { reason } => TargetReport {
                url: target.url().to_string(),
                healthy: false,
                reason: Some(reason),
            },
        })
        .collect();

    let healthy = targets.iter().all(|t| t.healthy);
    let report = ProbeReport { healthy, targets };
    report.render(mode);

    Ok(u8::from(!healthy))
}
