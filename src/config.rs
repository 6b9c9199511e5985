//! Watchdog configuration
//!
//! Configuration is assembled once at startup into an explicit [`Config`]
//! and passed into components; components never read ambient environment
//! state. Precedence: CLI flag > environment variable > `selfheal.toml` in
//! the repository root > built-in default. CLI and environment binding
//! happen in the clap layer; this module merges those overrides with the
//! optional config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::core::models::HealthTarget;

/// Default health endpoint when nothing is configured
pub const DEFAULT_HEALTH_URL: &str = "http://localhost:3001/health";

/// Default probing attempt budget
pub const DEFAULT_RETRIES: u32 = 5;

/// Default delay between probing attempts, in seconds
pub const DEFAULT_INTERVAL_SECS: f64 = 6.0;

/// Default per-request probe timeout, in seconds
///
/// Deliberately much shorter than the inter-attempt interval so a hung
/// target cannot stall an attempt beyond `targets × timeout`.
pub const DEFAULT_PROBE_TIMEOUT_SECS: f64 = 2.0;

/// Default clean-install command
pub const DEFAULT_INSTALL_COMMAND: &[&str] = &["npm", "ci", "--no-fund", "--no-audit"];

/// Default rebuild command
pub const DEFAULT_BUILD_COMMAND: &[&str] = &["npm", "run", "build"];

/// Name of the optional per-repository config file
pub const CONFIG_FILE_NAME: &str = "selfheal.toml";

/// Fully resolved watchdog configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Health endpoints; all must succeed for a healthy verdict
    pub targets: Vec<HealthTarget>,
    /// Probing attempt budget
    pub retries: u32,
    /// Delay between probing attempts, in seconds
    pub interval_secs: f64,
    /// Per-request probe timeout, in seconds
    pub probe_timeout_secs: f64,
    /// Whether the publish stage runs after a reset
    pub force_push: bool,
    /// Repository to watch and roll back
    pub repo: PathBuf,
    /// Clean dependency install command (argv)
    pub install_command: Vec<String>,
    /// Artifact rebuild command (argv)
    pub build_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: vec![HealthTarget::new(DEFAULT_HEALTH_URL)],
            retries: DEFAULT_RETRIES,
            interval_secs: DEFAULT_INTERVAL_SECS,
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            force_push: false,
            repo: PathBuf::from("."),
            install_command: argv(DEFAULT_INSTALL_COMMAND),
            build_command: argv(DEFAULT_BUILD_COMMAND),
        }
    }
}

impl Config {
    /// Delay between probing attempts
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.interval_secs)
    }

    /// Per-request probe timeout
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.probe_timeout_secs)
    }

    /// Assemble the configuration for a repository
    ///
    /// Reads `selfheal.toml` from the repository root if present, then
    /// applies `overrides` (CLI flags and environment, already bound by
    /// clap) on top.
    pub fn load(repo: &Path, overrides: Overrides) -> anyhow::Result<Self> {
        let file = FileConfig::load(repo);
        Self::resolve(repo, overrides, file)
    }

    /// Merge overrides, file values, and defaults
    pub fn resolve(repo: &Path, overrides: Overrides, file: FileConfig) -> anyhow::Result<Self> {
        let urls: Vec<String> = if overrides.urls.is_empty() {
            file.health.urls.unwrap_or_else(|| vec![DEFAULT_HEALTH_URL.to_string()])
        } else {
            overrides.urls
        };

        let targets: Vec<HealthTarget> = urls
            .iter()
            .flat_map(|u| HealthTarget::parse_list(u))
            .collect();
        if targets.is_empty() {
            anyhow::bail!("no health URLs configured");
        }

        let config = Self {
            targets,
            retries: overrides.retries.or(file.health.retries).unwrap_or(DEFAULT_RETRIES),
            interval_secs: overrides
                .interval_secs
                .or(file.health.interval_secs)
                .unwrap_or(DEFAULT_INTERVAL_SECS),
            probe_timeout_secs: overrides
                .probe_timeout_secs
                .or(file.health.probe_timeout_secs)
                .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS),
            force_push: overrides.force_push || file.rollback.force_push.unwrap_or(false),
            repo: repo.to_path_buf(),
            install_command: file.pipeline.install.unwrap_or_else(|| argv(DEFAULT_INSTALL_COMMAND)),
            build_command: file.pipeline.build.unwrap_or_else(|| argv(DEFAULT_BUILD_COMMAND)),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !self.interval_secs.is_finite() || self.interval_secs < 0.0 {
            anyhow::bail!("interval must be a non-negative number of seconds");
        }
        if !self.probe_timeout_secs.is_finite() || self.probe_timeout_secs <= 0.0 {
            anyhow::bail!("probe timeout must be a positive number of seconds");
        }
        if self.install_command.is_empty() {
            anyhow::bail!("pipeline.install must not be empty");
        }
        if self.build_command.is_empty() {
            anyhow::bail!("pipeline.build must not be empty");
        }
        Ok(())
    }
}

/// Values bound from CLI flags and environment variables
///
/// `None` / empty means "not given"; the file value or default applies.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Health URLs (each entry may itself be a comma-separated list)
    pub urls: Vec<String>,
    /// Probing attempt budget
    pub retries: Option<u32>,
    /// Delay between attempts, seconds
    pub interval_secs: Option<f64>,
    /// Per-request timeout, seconds
    pub probe_timeout_secs: Option<f64>,
    /// Enable the publish stage
    ///
    /// A flag can only enable: false here defers to the config file.
    pub force_push: bool,
}

/// `selfheal.toml` contents
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// `[health]` section
    #[serde(default)]
    pub health: HealthSection,
    /// `[rollback]` section
    #[serde(default)]
    pub rollback: RollbackSection,
    /// `[pipeline]` section
    #[serde(default)]
    pub pipeline: PipelineSection,
}

/// `[health]` keys
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthSection {
    /// Health endpoint URLs
    pub urls: Option<Vec<String>>,
    /// Probing attempt budget
    pub retries: Option<u32>,
    /// Delay between attempts, seconds
    pub interval_secs: Option<f64>,
    /// Per-request timeout, seconds
    pub probe_timeout_secs: Option<f64>,
}

/// `[rollback]` keys
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollbackSection {
    /// Enable the publish stage
    pub force_push: Option<bool>,
}

/// `[pipeline]` keys
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineSection {
    /// Clean dependency install command (argv)
    pub install: Option<Vec<String>>,
    /// Artifact rebuild command (argv)
    pub build: Option<Vec<String>>,
}

impl FileConfig {
    /// Load `selfheal.toml` from a repository root, or defaults if absent
    ///
    /// A malformed file is reported in the log and treated as absent.
    #[must_use]
    pub fn load(repo: &Path) -> Self {
        let path = repo.join(CONFIG_FILE_NAME);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed {}: {err}", path.display());
                Self::default()
            },
        }
    }
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}
