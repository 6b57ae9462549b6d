//! Merge-base computation and three-way merge of a working tree against
//! another commit.
//!
//! Fast-forward is detected by comparing the merge base against `HEAD`;
//! otherwise `MERGE_HEAD` is recorded and every path touched by either
//! side is resolved through [`merge_blobs`] and written into the working
//! tree, leaving the result staged for the caller's next `commit`.

mod blob;
mod error;

pub use blob::merge_blobs;
pub use error::MergeError;

use std::collections::BTreeSet;
use std::fs;

use git_hash::ObjectId;
use git_object::ObjectType;
use git_ref::{RefName, RefValue};
use git_repository::Repository;

/// Outcome of [`merge`]: whether the working tree was fast-forwarded or
/// merged three-way (with `MERGE_HEAD` left set for the next commit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    FastForward,
    ThreeWay,
}

/// The first commit reachable from both `a` and `b`, or `None` for
/// disjoint histories.
pub fn merge_base(
    repo: &Repository,
    a: ObjectId,
    b: ObjectId,
) -> Result<Option<ObjectId>, MergeError> {
    Ok(git_revwalk::merge_base(repo.odb(), a, b)?)
}

/// Merge `other` into the current `HEAD`.
///
/// If `HEAD` is an ancestor of `other`, the working tree is fast-forwarded
/// to `other` and `HEAD` is rewritten directly (no new commit). Otherwise
/// `MERGE_HEAD` is set to `other`, the working tree is emptied, and every
/// path is rematerialized from the three-way blob merge of base/HEAD/other
/// — the caller commits the result to finish the merge.
pub fn merge(repo: &Repository, other: ObjectId) -> Result<MergeOutcome, MergeError> {
    let head = repo.head_oid()?.ok_or(MergeError::NoHead(other))?;

    let base = merge_base(repo, head, other)?;
    if base == Some(head) {
        let other_commit = repo.read_commit(&other)?;
        repo.restore(&other_commit.tree)?;

        let head_name = RefName::new("HEAD")?;
        repo.refs().update(&head_name, &RefValue::direct(other), true)?;
        return Ok(MergeOutcome::FastForward);
    }

    let merge_head_name = RefName::new("MERGE_HEAD")?;
    repo.refs()
        .update(&merge_head_name, &RefValue::direct(other), false)?;

    let merged = merge_trees(repo, base, head, other)?;

    repo.empty_working_tree()?;
    for (path, bytes) in merged {
        let full = repo.worktree().join(&path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, bytes)?;
    }

    Ok(MergeOutcome::ThreeWay)
}

/// Three-way merge of the trees rooted at `head` and `other`, with `base`
/// (absent for disjoint histories) as the common ancestor. Every path
/// present in any of the three trees is resolved through [`merge_blobs`];
/// a side that lacks the path is treated as an empty blob there.
fn merge_trees(
    repo: &Repository,
    base: Option<ObjectId>,
    head: ObjectId,
    other: ObjectId,
) -> Result<std::collections::BTreeMap<String, Vec<u8>>, MergeError> {
    let head_tree = repo.read_commit(&head)?.tree;
    let other_tree = repo.read_commit(&other)?.tree;

    let head_flat = repo.flatten(&head_tree)?;
    let other_flat = repo.flatten(&other_tree)?;
    let base_flat = match base {
        Some(oid) => repo.flatten(&repo.read_commit(&oid)?.tree)?,
        None => Default::default(),
    };

    let mut paths: BTreeSet<&String> = BTreeSet::new();
    paths.extend(head_flat.keys());
    paths.extend(other_flat.keys());
    paths.extend(base_flat.keys());

    let mut out = std::collections::BTreeMap::new();
    for path in paths {
        let base_bytes = read_blob(repo, base_flat.get(path))?;
        let head_bytes = read_blob(repo, head_flat.get(path))?;
        let other_bytes = read_blob(repo, other_flat.get(path))?;

        let merged = merge_blobs(
            base_bytes.as_deref(),
            head_bytes.as_deref(),
            other_bytes.as_deref(),
        )?;
        out.insert(path.clone(), merged);
    }

    Ok(out)
}

fn read_blob(repo: &Repository, oid: Option<&ObjectId>) -> Result<Option<Vec<u8>>, MergeError> {
    match oid {
        Some(oid) => Ok(Some(repo.odb().get(oid, Some(ObjectType::Blob))?)),
        None => Ok(None),
    }
}
