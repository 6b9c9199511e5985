//! Domain models for selfheal
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`HealthTarget`] - One endpoint whose success is required for health
//! - [`Checkpoint`] - A `SAFE_<branch>_*` tag over a known-good state
//! - [`ProbeStatus`] - Result of probing a single target once
//! - [`RestoreOutcome`] / [`StageResult`] / [`StageError`] - Rollback results
//! - [`Outcome`] - What a whole watchdog run decided

mod checkpoint;
mod outcome;
mod probe;
mod target;

pub use checkpoint::{Checkpoint, SAFE_TAG_PREFIX};
pub use outcome::{Outcome, RestoreOutcome, StageError, StageResult};
pub use probe::ProbeStatus;
pub use target::HealthTarget;
