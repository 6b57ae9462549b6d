//! Commit graph traversal and reachable-object enumeration.
//!
//! Operates over any [`ObjectSource`], which lets replication walk a
//! reachable set while substituting a remote store for objects the local
//! store doesn't have yet (see `git-repository`'s fetch/push).

use std::collections::HashSet;

use git_hash::ObjectId;
use git_object::{Commit, Object, ObjectType};
use git_odb::ObjectDatabase;

/// Errors produced while walking commits or objects.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("{oid} is not a commit (found {actual})")]
    NotACommit { oid: ObjectId, actual: ObjectType },

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),
}

/// Something that can resolve an oid to a parsed object. Implemented for
/// [`ObjectDatabase`] directly; replication implements it over a pair of
/// stores so a missing local object is transparently copied in from the
/// remote as it's encountered.
pub trait ObjectSource {
    fn read(&self, oid: &ObjectId) -> Result<Object, WalkError>;

    fn read_commit(&self, oid: &ObjectId) -> Result<Commit, WalkError> {
        match self.read(oid)? {
            Object::Commit(c) => Ok(c),
            other => Err(WalkError::NotACommit {
                oid: *oid,
                actual: other.object_type(),
            }),
        }
    }
}

impl ObjectSource for ObjectDatabase {
    fn read(&self, oid: &ObjectId) -> Result<Object, WalkError> {
        Ok(self.read_cached(oid)?)
    }
}

impl<T: ObjectSource + ?Sized> ObjectSource for &T {
    fn read(&self, oid: &ObjectId) -> Result<Object, WalkError> {
        (**self).read(oid)
    }
}

/// Breadth-first walk over commit oids reachable from `seeds` via parent
/// edges. Seeds and each visited commit's *first* parent are placed at the
/// front of the work deque, so first-parent history is enumerated
/// contiguously; other parents are appended at the back. Each oid is
/// yielded at most once; an oid that doesn't resolve to a commit (absent,
/// or not present at all) is silently skipped rather than erroring, except
/// when it exists but is the wrong object type.
pub fn walk_commits<S: ObjectSource>(
    source: &S,
    seeds: impl IntoIterator<Item = ObjectId>,
) -> Result<Vec<ObjectId>, WalkError> {
    use std::collections::VecDeque;

    let mut deque: VecDeque<ObjectId> = seeds.into_iter().collect();
    let mut visited = HashSet::new();
    let mut out = Vec::new();

    while let Some(oid) = deque.pop_front() {
        if !visited.insert(oid) {
            continue;
        }

        let commit = match source.read(&oid) {
            Ok(Object::Commit(c)) => c,
            Ok(_) => continue,
            Err(WalkError::Odb(git_odb::OdbError::NotFound(_))) => continue,
            Err(e) => return Err(e),
        };

        out.push(oid);

        let mut parents = commit.parents.into_iter();
        if let Some(first) = parents.next() {
            deque.push_front(first);
        }
        for rest in parents {
            deque.push_back(rest);
        }
    }

    Ok(out)
}

/// For each commit in `walk_commits(seeds)`, yield the commit oid, then
/// (if its tree hasn't been seen) the tree oid and every blob/tree oid
/// reachable from it — each oid at most once, container always before its
/// children, so on-demand replication can fetch a parent and parse it to
/// learn of its children.
pub fn walk_objects<S: ObjectSource>(
    source: &S,
    seeds: impl IntoIterator<Item = ObjectId>,
) -> Result<Vec<ObjectId>, WalkError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for commit_oid in walk_commits(source, seeds)? {
        out.push(commit_oid);
        let commit = source.read_commit(&commit_oid)?;
        walk_tree(source, commit.tree, &mut seen, &mut out)?;
    }

    Ok(out)
}

/// Explicit-worklist DFS over a tree's contents, to avoid recursing once
/// per directory level on deep trees.
fn walk_tree<S: ObjectSource>(
    source: &S,
    root: ObjectId,
    seen: &mut HashSet<ObjectId>,
    out: &mut Vec<ObjectId>,
) -> Result<(), WalkError> {
    let mut stack = vec![root];
    while let Some(oid) = stack.pop() {
        if !seen.insert(oid) {
            continue;
        }
        out.push(oid);

        if let Object::Tree(tree) = source.read(&oid)? {
            for entry in tree.entries {
                stack.push(entry.oid);
            }
        }
    }
    Ok(())
}

/// The first oid reachable from `b` (via `walk_commits`) that is also
/// reachable from `a`, or `None` for disjoint histories. When `a` is an
/// ancestor of `b`, this is `a` itself.
pub fn merge_base<S: ObjectSource>(
    source: &S,
    a: ObjectId,
    b: ObjectId,
) -> Result<Option<ObjectId>, WalkError> {
    let reachable_from_a: HashSet<ObjectId> = walk_commits(source, [a])?.into_iter().collect();
    for oid in walk_commits(source, [b])? {
        if reachable_from_a.contains(&oid) {
            return Ok(Some(oid));
        }
    }
    Ok(None)
}
