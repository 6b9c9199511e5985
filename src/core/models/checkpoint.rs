//! Checkpoint model
//!
//! A checkpoint is a git tag named `SAFE_<branch>_<suffix>` marking a state
//! that already passed validation. The tagging process is external; this
//! crate only ever selects and restores checkpoints, it never creates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Naming prefix shared by all checkpoint tags
pub const SAFE_TAG_PREFIX: &str = "SAFE_";

/// A named, timestamp-ordered marker over a known-good state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Full tag name, e.g. `SAFE_main_1715000000`
    pub name: String,

    /// Tag creation time (`creatordate`)
    pub created_at: DateTime<Utc>,
}

impl Checkpoint {
    /// Create a checkpoint from a tag name and its creation time
    #[must_use]
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            created_at,
        }
    }

    /// Whether this checkpoint belongs to the given branch
    ///
    /// Scoping is by naming convention: `SAFE_<branch>_<suffix>`. The
    /// underscore after the branch name is required, so `SAFE_main2_1` does
    /// not match branch `main`.
    #[must_use]
    pub fn belongs_to(&self, lineage: &str) -> bool {
        self.name
            .strip_prefix(SAFE_TAG_PREFIX)
            .and_then(|rest| rest.strip_prefix(lineage))
            .is_some_and(|rest| rest.starts_with('_'))
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
