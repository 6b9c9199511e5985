//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Outcome, StageResult};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a full watchdog run
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct HealReport {
    /// What the run decided
    pub outcome: Outcome,
}

impl HealReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        match &self.outcome {
            Outcome::Healthy => {
                println!("{}", "healthy; no action needed".green());
            },
            Outcome::Restored {
                lineage,
                checkpoint,
                result,
            } => {
                println!("restoring to {} on {}", checkpoint.name.bold(), lineage.bold());
                print_stage("reset", &result.reset);
                print_stage("publish", &result.publish);
                print_stage("install", &result.install);
                print_stage("build", &result.build);
                if !result.fully_succeeded() {
                    println!(
                        "{}",
                        "rollback attempted with failures; check the service manually".yellow()
                    );
                }
            },
            Outcome::NoCheckpoint { lineage } => {
                println!(
                    "{}",
                    format!("no SAFE_* tag found for branch '{lineage}'; manual intervention required")
                        .red()
                );
            },
        }
    }
}

/// Result of a probe-only `check` run
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    /// Aggregate verdict: all targets healthy
    pub healthy: bool,
    /// Per-target results
    pub targets: Vec<TargetReport>,
}

/// One target's probe result
#[derive(Debug, Serialize)]
pub struct TargetReport {
    /// The target URL
    pub url: String,
    /// Whether the target responded with a success status
    pub healthy: bool,
    /// Failure reason when unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ProbeReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for target in &self.targets {
            if target.healthy {
                println!("  {} {}", "ok".green(), target.url);
            } else {
                let reason = target.reason.as_deref().unwrap_or("unhealthy");
                println!("  {} {} ({reason})", "fail".red(), target.url);
            }
        }
        if self.healthy {
            println!("{}", "healthy".green());
        } else {
            println!("{}", "unhealthy".red());
        }
    }
}

fn print_stage(name: &str, result: &StageResult) {
    match result {
        StageResult::Passed => println!("  {name:<8} {}", "ok".green()),
        StageResult::Failed { error } => println!("  {name:<8} {}: {error}", "failed".red()),
        StageResult::Skipped => println!("  {name:<8} {}", "skipped".dimmed()),
    }
}

fn render_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("error: failed to serialize output: {err}"),
    }
}
