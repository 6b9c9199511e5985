//! Version control system port
//!
//! Defines the interface for interacting with version control.

// Generated mock types don't carry docs or Debug impls
#![cfg_attr(test, allow(missing_docs, missing_debug_implementations))]

use crate::core::models::{Checkpoint, StageError};

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
/// Queries return `anyhow::Result`; the destructive operations return a
/// typed [`StageError`] so the rollback executor can record exactly how
/// each stage failed.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Get the branch the working tree is currently on
    ///
    /// Errors on detached HEAD: rolling back without a branch to scope
    /// checkpoints to would risk restoring another lineage's state.
    fn current_lineage(&self) -> anyhow::Result<String>;

    /// Synchronize checkpoint tags from the remote, best-effort
    ///
    /// Fire-and-forget: failures are logged by the implementation and
    /// never surfaced. A stale local tag list is still usable.
    fn fetch_checkpoints(&self);

    /// List checkpoint tags, newest creation time first
    fn list_checkpoints(&self) -> anyhow::Result<Vec<Checkpoint>>;

    /// Force the working tree to exactly match the checkpoint (destructive)
    fn reset_to(&self, checkpoint: &Checkpoint) -> Result<(), StageError>;

    /// Push the branch to the remote with a lease guard
    ///
    /// Must reject the push if the remote advanced since last observed,
    /// rather than overwriting a concurrent legitimate change.
    fn publish(&self, lineage: &str) -> Result<(), StageError>;
}
