//! Checkpoint locator - newest safe tag for a branch
//!
//! Prefix-scoping prevents cross-branch rollback: a hotfix branch must
//! never be rolled back to a checkpoint created on an unrelated branch.
//! The locator performs no validation of the checkpoint itself; it trusts
//! the tagging process to only mark known-good states.

use crate::core::models::Checkpoint;
use crate::core::ports::VersionControl;

/// Find the most recent checkpoint belonging to a branch
///
/// Synchronizes tags from the remote first (best-effort; a failed fetch
/// leaves the local tag list in use). Returns `None` when the branch has
/// no matching checkpoint.
///
/// Selection is by creation time, newest first. Equal timestamps resolve
/// by name, lexically descending: deterministic, and with the usual
/// numeric-suffix convention the lexically greater name is the later tag.
pub fn locate_latest(
    vcs: &dyn VersionControl,
    lineage: &str,
) -> anyhow::Result<Option<Checkpoint>> {
    vcs.fetch_checkpoints();

    let mut matching: Vec<Checkpoint> = vcs
        .list_checkpoints()?
        .into_iter()
        .filter(|c| c.belongs_to(lineage))
        .collect();

    matching.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.name.cmp(&a.name))
    });

    Ok(matching.into_iter().next())
}
