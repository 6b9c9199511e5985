//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Git operations (branch lookup, tags, reset, push)
//! - `http` - Blocking HTTP health probes
//! - `pipeline` - External install/build commands

pub mod git;
pub mod http;
pub mod pipeline;
