//! Rollback and run outcomes
//!
//! Every external command's result is modeled as a typed value, so the
//! executor's continue-on-failure policy is an explicit decision per stage
//! rather than an implicit fallthrough.

use serde::Serialize;

use super::Checkpoint;

/// Why an external command stage failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageError {
    /// The command could not be spawned at all
    #[error("could not launch `{command}`: {reason}")]
    Launch {
        /// The command line that failed to start
        command: String,
        /// OS-level reason
        reason: String,
    },

    /// The command ran and exited non-zero
    #[error("`{command}` exited with status {status}")]
    Exited {
        /// The command line that ran
        command: String,
        /// Exit status (-1 when killed by signal)
        status: i32,
        /// Captured stderr, trimmed
        stderr: String,
    },

    /// The remote advanced since last fetch; the lease-guarded push was
    /// rejected rather than overwriting someone else's work
    #[error("remote rejected update: '{lineage}' advanced since last fetch")]
    RemoteAdvanced {
        /// The branch whose push was rejected
        lineage: String,
    },
}

/// Result of one rollback stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StageResult {
    /// The stage completed successfully
    Passed,
    /// The stage was attempted and failed; the run continued
    Failed {
        /// The typed failure
        error: StageError,
    },
    /// The stage was not attempted (publish with force-push disabled)
    Skipped,
}

impl StageResult {
    /// Whether the stage completed successfully
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Whether the stage was skipped
    #[must_use]
    pub const fn skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

impl From<Result<(), StageError>> for StageResult {
    fn from(result: Result<(), StageError>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(error) => Self::Failed { error },
        }
    }
}

/// Per-stage results of a rollback
///
/// Stages are attempted in order (reset, publish, install, build), each
/// regardless of the previous stage's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreOutcome {
    /// Hard reset of the working tree to the checkpoint
    pub reset: StageResult,
    /// Lease-guarded force push of the branch (`Skipped` unless enabled)
    pub publish: StageResult,
    /// Clean, lockfile-exact dependency reinstall
    pub install: StageResult,
    /// Artifact rebuild
    pub build: StageResult,
}

impl RestoreOutcome {
    /// Whether every attempted stage passed
    #[must_use]
    pub const fn fully_succeeded(&self) -> bool {
        self.reset.passed()
            && (self.publish.passed() || self.publish.skipped())
            && self.install.passed()
            && self.build.passed()
    }
}

/// What a whole watchdog run decided
///
/// The process exit code is derived from this at the outermost boundary:
/// `Healthy` and `Restored` exit 0, `NoCheckpoint` exits 2. Stage failures
/// inside a `Restored` outcome do not change the exit code; they are
/// reported in the output instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The aggregate health check succeeded within the retry budget
    Healthy,
    /// A rollback was attempted against the located checkpoint
    Restored {
        /// The branch that was restored
        lineage: String,
        /// The checkpoint restored to
        checkpoint: Checkpoint,
        /// Per-stage results
        result: RestoreOutcome,
    },
    /// The service is down and no checkpoint exists for the branch
    NoCheckpoint {
        /// The branch that has no safe tag
        lineage: String,
    },
}

impl Outcome {
    /// Process exit code for this outcome
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Healthy | Self::Restored { .. } => 0,
            Self::NoCheckpoint { .. } => 2,
        }
    }
}
