//! selfheal - A deployment watchdog that rolls back to the last known-good
//! tag when health checks fail
//!
//! This library probes a service's health endpoints and, on sustained
//! failure, resets the working tree to the newest `SAFE_<branch>_*` tag,
//! optionally force-publishes the rollback, and rebuilds the service.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
