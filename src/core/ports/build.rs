//! Build pipeline port
//!
//! Defines the interface for reinstalling dependencies and rebuilding
//! artifacts after a rollback.

// Generated mock types don't carry docs or Debug impls
#![cfg_attr(test, allow(missing_docs, missing_debug_implementations))]

use crate::core::models::StageError;

/// Build pipeline abstraction
///
/// Both operations report a typed failure; neither is fatal to the
/// watchdog.
#[cfg_attr(test, mockall::automock)]
pub trait BuildPipeline: Send + Sync {
    /// Reinstall the exact dependency set declared by the lock state
    ///
    /// A clean install, not an incremental update.
    fn install(&self) -> Result<(), StageError>;

    /// Regenerate build artifacts from source
    fn build(&self) -> Result<(), StageError>;
}
