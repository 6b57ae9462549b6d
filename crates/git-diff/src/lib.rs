//! Diff adapter: a thin wrapper around an external line-diff tool.
//!
//! The core never computes a line-level diff itself — it writes both
//! sides of a change to temporary files and shells out to `diff`,
//! exactly as [`git_merge::merge_blobs`] shells out for three-way merge.
//! This crate's own job is just comparing trees: building the path→oid
//! map for each of several tree snapshots, classifying each differing
//! path as added/deleted/modified, and handing the two blob sides to the
//! external tool for display.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;

use git_hash::ObjectId;
use git_object::ObjectType;
use git_repository::Repository;
use git_utils::subprocess::{GitCommand, StdioMode};

pub use error::DiffError;

mod error {
    use git_hash::ObjectId;

    #[derive(Debug, thiserror::Error)]
    pub enum DiffError {
        #[error("external tool '{tool}' failed with status {status}")]
        ExternalTool { tool: String, status: i32 },

        #[error(transparent)]
        Repo(#[from] git_repository::RepoError),

        #[error(transparent)]
        Odb(#[from] git_odb::OdbError),

        #[error(transparent)]
        Io(#[from] std::io::Error),

        #[error("object {0} is not a blob")]
        NotABlob(ObjectId),
    }
}

/// Classification of a path that differs between two tree snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    New,
    Deleted,
    Modified,
}

/// One row of a multi-tree comparison: a path and its oid (if present) in
/// each of the compared trees, in the order the trees were given.
#[derive(Debug, Clone)]
pub struct ComparedPath {
    pub path: String,
    pub oids: Vec<Option<ObjectId>>,
}

/// Build a path→(oid per tree) map over any number of flattened tree
/// snapshots. A path absent from a given tree carries `None` in that
/// tree's slot. Rows are returned in path order.
pub fn compare_trees(trees: &[BTreeMap<String, ObjectId>]) -> Vec<ComparedPath> {
    let mut paths: std::collections::BTreeSet<&String> = std::collections::BTreeSet::new();
    for tree in trees {
        paths.extend(tree.keys());
    }

    paths
        .into_iter()
        .map(|path| ComparedPath {
            path: path.clone(),
            oids: trees.iter().map(|t| t.get(path).copied()).collect(),
        })
        .collect()
}

/// Classify a single path's change between a `from` and `to` side: `None`
/// on the `from` side is a new file, `None` on the `to` side is a
/// deletion, differing oids on both sides is a modification. Identical
/// oids (or both absent) mean no change, signalled by `None`.
pub fn classify(from: Option<ObjectId>, to: Option<ObjectId>) -> Option<ChangeKind> {
    match (from, to) {
        (None, None) => None,
        (None, Some(_)) => Some(ChangeKind::New),
        (Some(_), None) => Some(ChangeKind::Deleted),
        (Some(a), Some(b)) if a == b => None,
        (Some(_), Some(_)) => Some(ChangeKind::Modified),
    }
}

/// Every path that differs between two flattened tree snapshots, with its
/// classification.
pub fn iter_changed_files(
    from: &BTreeMap<String, ObjectId>,
    to: &BTreeMap<String, ObjectId>,
) -> Vec<(String, ChangeKind)> {
    compare_trees(&[from.clone(), to.clone()])
        .into_iter()
        .filter_map(|row| classify(row.oids[0], row.oids[1]).map(|kind| (row.path, kind)))
        .collect()
}

/// Diff two blob oids (either side may be absent, meaning an empty file)
/// by writing them to temp files and invoking `diff -u` with `a/<path>`
/// and `b/<path>` labels, matching the external unified-diff contract
/// `git_merge::merge_blobs` also relies on.
pub fn diff_blobs(
    repo: &Repository,
    path: &str,
    from_oid: Option<ObjectId>,
    to_oid: Option<ObjectId>,
) -> Result<Vec<u8>, DiffError> {
    let dir = tempfile::tempdir()?;
    let from_path = dir.path().join("a");
    let to_path = dir.path().join("b");

    write_blob_or_empty(repo, from_oid, &from_path)?;
    write_blob_or_empty(repo, to_oid, &to_path)?;

    let result = GitCommand::new("diff")
        .arg("-u")
        .arg("--label")
        .arg(format!("a/{path}"))
        .arg("--label")
        .arg(format!("b/{path}"))
        .arg(&from_path)
        .arg(&to_path)
        .stdout(StdioMode::Pipe)
        .stderr(StdioMode::Pipe)
        .run()
        .map_err(|_| DiffError::ExternalTool {
            tool: "diff".into(),
            status: -1,
        })?;

    if let Some(code) = result.status.code() {
        if code > 1 {
            return Err(DiffError::ExternalTool {
                tool: "diff".into(),
                status: code,
            });
        }
    }

    Ok(result.stdout)
}

fn write_blob_or_empty(
    repo: &Repository,
    oid: Option<ObjectId>,
    path: &std::path::Path,
) -> Result<(), DiffError> {
    let bytes = match oid {
        Some(oid) => repo.odb().get(&oid, Some(ObjectType::Blob))?,
        None => Vec::new(),
    };
    let mut f = fs::File::create(path)?;
    f.write_all(&bytes)?;
    Ok(())
}

/// Concatenated unified diff across every changed path between two tree
/// snapshots, in path order.
pub fn diff_trees(
    repo: &Repository,
    from: &BTreeMap<String, ObjectId>,
    to: &BTreeMap<String, ObjectId>,
) -> Result<Vec<u8>, DiffError> {
    let mut out = Vec::new();
    for row in compare_trees(&[from.clone(), to.clone()]) {
        let (from_oid, to_oid) = (row.oids[0], row.oids[1]);
        if classify(from_oid, to_oid).is_none() {
            continue;
        }
        out.extend(diff_blobs(repo, &row.path, from_oid, to_oid)?);
    }
    Ok(out)
}
