//! Git integration adapter
//!
//! Implements the `VersionControl` trait. Branch discovery goes through
//! libgit2; tag listing, fetch, reset, and push shell out to the `git`
//! CLI, which owns the user's credential and transport configuration.

use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::warn;

use crate::core::models::{Checkpoint, SAFE_TAG_PREFIX, StageError};
use crate::core::ports::VersionControl;

/// Git-based version control implementation
#[derive(Debug, Clone)]
pub struct GitVersionControl {
    /// Working directory
    workdir: PathBuf,
}

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new(workdir: PathBuf) -> Self {
        Self { workdir }
    }

    /// Create a git adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git").current_dir(&self.workdir).args(args).output()
    }

    fn git_checked(&self, args: &[&str]) -> Result<Output, StageError> {
        let command = format!("git {}", args.join(" "));
        let output = self.git(args).map_err(|err| StageError::Launch {
            command: command.clone(),
            reason: err.to_string(),
        })?;

        if output.status.success() {
            Ok(output)
        } else {
            Err(StageError::Exited {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl VersionControl for GitVersionControl {
    fn current_lineage(&self) -> anyhow::Result<String> {
        let repo = git2::Repository::discover(&self.workdir)
            .with_context(|| format!("{} is not a git repository", self.workdir.display()))?;
        let head = repo.head().context("cannot resolve HEAD")?;
        if !head.is_branch() {
            anyhow::bail!("HEAD is detached; cannot determine which branch to roll back");
        }
        head.shorthand()
            .map(String::from)
            .context("branch name is not valid UTF-8")
    }

    fn fetch_checkpoints(&self) {
        match self.git(&["fetch", "--tags", "origin"]) {
            Ok(output) if output.status.success() => {},
            Ok(output) => warn!(
                "tag fetch failed (continuing with local tags): {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ),
            Err(err) => warn!("tag fetch failed (continuing with local tags): {err}"),
        }
    }

    fn list_checkpoints(&self) -> anyhow::Result<Vec<Checkpoint>> {
        // Listing is already filtered to the shared prefix and sorted
        // newest-first; the locator narrows to one branch and re-sorts
        // for the tie-break.
        let output = self.git_checked(&[
            "tag",
            "--list",
            &format!("{SAFE_TAG_PREFIX}*"),
            "--sort=-creatordate",
            "--format=%(refname:strip=2)\t%(creatordate:unix)",
        ])?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut checkpoints = Vec::new();
        for line in stdout.lines() {
            match parse_tag_line(line) {
                Some(checkpoint) => checkpoints.push(checkpoint),
                None if line.trim().is_empty() => {},
                None => warn!("skipping unparseable tag listing line: {line:?}"),
            }
        }
        Ok(checkpoints)
    }

    fn reset_to(&self, checkpoint: &Checkpoint) -> Result<(), StageError> {
        self.git_checked(&["reset", "--hard", &checkpoint.name]).map(|_| ())
    }

    fn publish(&self, lineage: &str) -> Result<(), StageError> {
        match self.git_checked(&["push", "--force-with-lease", "origin", lineage]) {
            Ok(_) => Ok(()),
            // --force-with-lease rejection reports "stale info"
            Err(StageError::Exited { stderr, .. }) if stderr.contains("stale info") => {
                Err(StageError::RemoteAdvanced {
                    lineage: lineage.to_string(),
                })
            },
            Err(err) => Err(err),
        }
    }
}

fn parse_tag_line(line: &str) -> Option<Checkpoint> {
    let (name, timestamp) = line.split_once('\t')?;
    let secs: i64 = timestamp.trim().parse().ok()?;
    let created_at: DateTime<Utc> = DateTime::from_timestamp(secs, 0)?;
    Some(Checkpoint::new(name.trim(), created_at))
}
