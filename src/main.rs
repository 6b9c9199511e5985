//! selfheal - A deployment watchdog that rolls back to the last known-good
//! tag when health checks fail
//!
//! The watchdog runs to completion and exits: `0` when the service is
//! healthy or a rollback was attempted, `2` when the service is down and no
//! safe tag exists for the current branch, `1` on startup errors.

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

use std::process::ExitCode;

/// Main entry point for the selfheal CLI
///
/// The exit code is derived here, at the outermost boundary. The core
/// logic returns an outcome value and never terminates the process itself.
fn main() -> ExitCode {
    match selfheal::cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        },
    }
}
