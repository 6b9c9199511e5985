//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core watchdog logic and
//! external systems (git, the build pipeline, the network).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core decision sequence depends only on these traits, never on
//! concrete implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing core logic
//! - **Clarity**: Clear boundaries between layers

mod build;
mod probe;
mod vcs;

pub use build::BuildPipeline;
pub use probe::HealthTransport;
pub use vcs::VersionControl;

#[cfg(test)]
pub use build::MockBuildPipeline;
#[cfg(test)]
pub use probe::MockHealthTransport;
#[cfg(test)]
pub use vcs::MockVersionControl;
