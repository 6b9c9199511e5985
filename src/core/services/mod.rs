//! Watchdog services
//!
//! The probe / locate / restore decision sequence, as pure orchestration
//! over the port traits. Strictly sequential: the locator only runs after
//! the prober has exhausted every attempt, and the executor only runs if
//! the locator found a checkpoint.
//!
//! - [`prober`] - Aggregate health probing with bounded retries
//! - [`locator`] - Newest matching checkpoint for a branch
//! - [`restorer`] - Four-stage continue-on-failure rollback
//! - [`watchdog`] - Top-level run, returning an [`Outcome`](crate::core::models::Outcome)

pub mod locator;
pub mod prober;
pub mod restorer;
pub mod watchdog;

pub use locator::locate_latest;
pub use prober::probe;
pub use restorer::restore;
pub use watchdog::Watchdog;
