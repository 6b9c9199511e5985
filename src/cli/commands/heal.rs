//! Full watchdog run

use crate::adapters::git::GitVersionControl;
use crate::adapters::http::HttpHealthTransport;
use crate::adapters::pipeline::CommandPipeline;
use crate::cli::app::HealArgs;
use crate::config::{Config, Overrides};
use crate::core::services::Watchdog;
use crate::output::{HealReport, OutputMode};

/// Probe the configured targets and roll back on sustained failure
pub fn heal(args: &HealArgs, mode: OutputMode) -> anyhow::Result<u8> {
    let overrides = Overrides {
        urls: args.urls.clone(),
        retries: args.retries,
        interval_secs: args.interval,
        probe_timeout_secs: args.probe_timeout,
        force_push: args.force_push,
    };
    let config = Config::load(&args.repo, overrides)?;

    let transport = HttpHealthTransport::new(config.probe_timeout())?;
    let vcs = GitVersionControl::new(config.repo.clone());
    let pipeline = CommandPipeline::new(
        config.repo.clone(),
        config.install_command.clone(),
        config.build_command.clone(),
    );

    let outcome = Watchdog::new(&transport, &vcs, &pipeline).run(&config)?;

    let report = HealReport { outcome };
    report.render(mode);
    Ok(report.outcome.exit_code())
}
