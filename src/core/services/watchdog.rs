//! Top-level watchdog run
//!
//! Prober gates everything: a healthy verdict within the retry budget ends
//! the run with no rollback. Only on exhausted retries does control pass
//! to the locator, and the executor only runs if a checkpoint was found.

use log::info;

use crate::config::Config;
use crate::core::models::Outcome;
use crate::core::ports::{BuildPipeline, HealthTransport, VersionControl};
use crate::core::services::{locator, prober, restorer};

/// The composed watchdog
///
/// Owns nothing; borrows its collaborators so the caller controls adapter
/// construction and lifetime.
#[derive(Clone, Copy)]
pub struct Watchdog<'a> {
    transport: &'a dyn HealthTransport,
    vcs: &'a dyn VersionControl,
    pipeline: &'a dyn BuildPipeline,
}

impl std::fmt::Debug for Watchdog<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watchdog").finish_non_exhaustive()
    }
}

impl<'a> Watchdog<'a> {
    /// Compose a watchdog from its collaborators
    #[must_use]
    pub const fn new(
        transport: &'a dyn HealthTransport,
        vcs: &'a dyn VersionControl,
        pipeline: &'a dyn BuildPipeline,
    ) -> Self {
        Self {
            transport,
            vcs,
            pipeline,
        }
    }

    /// Run the watchdog to completion
    ///
    /// Never exits the process; the caller maps the returned [`Outcome`]
    /// to an exit code at the outermost boundary. Errors here are
    /// environment problems (for example, not a git repository), not
    /// health or rollback failures.
    pub fn run(&self, config: &Config) -> anyhow::Result<Outcome> {
        if prober::probe(self.transport, &config.targets, config.retries, config.interval()) {
            return Ok(Outcome::Healthy);
        }

        let lineage = self.vcs.current_lineage()?;
        let Some(checkpoint) = locator::locate_latest(self.vcs, &lineage)? else {
            return Ok(Outcome::NoCheckpoint { lineage });
        };

        info!("restoring to {checkpoint} on {lineage}");
        let result = restorer::restore(
            self.vcs,
            self.pipeline,
            &checkpoint,
            &lineage,
            config.force_push,
        );

        Ok(Outcome::Restored {
            lineage,
            checkpoint,
            result,
        })
    }
}
