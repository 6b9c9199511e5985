//! Rollback executor - four-stage continue-on-failure restore
//!
//! Reset, publish, install, build. Each stage is attempted regardless of
//! the previous stage's outcome and each result is recorded; best-effort
//! recovery must never crash the watchdog. The local reset is the primary
//! recovery action - a failed publish or rebuild still leaves the tree on
//! the checkpoint.

use log::{debug, warn};

use crate::core::models::{Checkpoint, RestoreOutcome, StageError, StageResult};
use crate::core::ports::{BuildPipeline, VersionControl};

/// Restore the working tree to a checkpoint
///
/// When `publish` is false the publish stage is skipped entirely, not
/// attempted-and-failed.
#[must_use]
pub fn restore(
    vcs: &dyn VersionControl,
    pipeline: &dyn BuildPipeline,
    checkpoint: &Checkpoint,
    lineage: &str,
    publish: bool,
) -> RestoreOutcome {
    let reset = run_stage("reset", vcs.reset_to(checkpoint));

    let publish = if publish {
        run_stage("publish", vcs.publish(lineage))
    } else {
        debug!("force push disabled; skipping publish");
        StageResult::Skipped
    };

    let install = run_stage("install", pipeline.install());
    let build = run_stage("build", pipeline.build());

    RestoreOutcome {
        reset,
        publish,
        install,
        build,
    }
}

fn run_stage(name: &str, result: Result<(), StageError>) -> StageResult {
    match &result {
        Ok(()) => debug!("{name}: ok"),
        Err(err) => warn!("{name} failed: {err}"),
    }
    StageResult::from(result)
}
