//! Health target model
//!
//! One network endpoint whose success response is required for the
//! aggregate health verdict.

use serde::{Deserialize, Serialize};

/// A single health-check endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthTarget(String);

impl HealthTarget {
    /// Create a target from a URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The target URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }

    /// Parse a comma-separated URL list into targets
    ///
    /// Entries are whitespace-trimmed; empty entries are dropped.
    #[must_use]
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',')
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(Self::new)
            .collect()
    }
}

impl std::fmt::Display for HealthTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HealthTarget {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}
