//! Replication: fetch/push object closures between two repository roots
//! over the filesystem. No sockets, no authentication.

use std::collections::HashSet;
use std::path::Path;

use git_hash::ObjectId;
use git_object::Object;
use git_odb::ObjectDatabase;
use git_ref::{RefName, RefValue};
use git_revwalk::{walk_objects, ObjectSource, WalkError};

use crate::{RepoError, Repository};

/// Reads from `local` first; a miss is read from `remote` and written
/// through to `local` before being returned, so by the time a walk over
/// this source finishes, every visited oid is already present locally.
struct CombinedSource<'a> {
    local: &'a ObjectDatabase,
    remote: &'a ObjectDatabase,
}

impl ObjectSource for CombinedSource<'_> {
    fn read(&self, oid: &ObjectId) -> Result<Object, WalkError> {
        if self.local.exists(oid) {
            return Ok(self.local.read_cached(oid)?);
        }
        let obj = self.remote.read_cached(oid)?;
        self.local.write(&obj)?;
        Ok(obj)
    }
}

impl Repository {
    /// Enumerate the remote's `refs/heads/`, pull in every object reachable
    /// from those heads that the local store is missing, then mirror each
    /// remote branch oid into `refs/remote/<branch>` locally.
    pub fn fetch(&self, remote_path: impl Into<std::path::PathBuf>) -> Result<(), RepoError> {
        let remote = Repository::at(remote_path)?;
        let remote_heads = remote.refs.iter("refs/heads/")?;
        let seeds: Vec<ObjectId> = remote_heads.iter().filter_map(|(_, v)| v.oid()).collect();

        let source = CombinedSource {
            local: &self.odb,
            remote: remote.odb(),
        };
        walk_objects(&source, seeds).map_err(odb_err)?;

        for (name, value) in &remote_heads {
            let Some(oid) = value.oid() else { continue };
            let branch = name.as_str().strip_prefix("refs/heads/").unwrap_or(name.as_str());
            let local_name = RefName::new(format!("refs/remote/{branch}"))?;
            self.refs.update(&local_name, &RefValue::direct(oid), true)?;
        }

        Ok(())
    }

    /// Resolve `refname` locally, push every object in its closure the
    /// remote doesn't already have, then update the remote ref to match.
    pub fn push(
        &self,
        remote_path: impl Into<std::path::PathBuf>,
        refname: &str,
    ) -> Result<(), RepoError> {
        let ref_name = RefName::new(refname)?;
        let local_oid = self
            .refs
            .get_oid(&ref_name, true)?
            .ok_or_else(|| RepoError::RefNotAnOid(refname.to_string()))?;

        let remote = Repository::at(remote_path)?;
        let remote_heads = remote.refs.iter("refs/heads/")?;
        let known_remote_oids: Vec<ObjectId> = remote_heads
            .iter()
            .filter_map(|(_, v)| v.oid())
            .filter(|oid| self.odb.exists(oid))
            .collect();

        let remote_known_closure: HashSet<ObjectId> =
            walk_objects(&self.odb, known_remote_oids).map_err(odb_err)?.into_iter().collect();
        let local_closure = walk_objects(&self.odb, [local_oid]).map_err(odb_err)?;

        for oid in local_closure {
            if remote_known_closure.contains(&oid) {
                continue;
            }
            if !remote.odb().exists(&oid) {
                let obj = self.odb.read(&oid)?;
                remote.odb().write(&obj)?;
            }
        }

        remote
            .refs
            .update(&ref_name, &RefValue::direct(local_oid), true)?;
        Ok(())
    }
}

fn odb_err(e: WalkError) -> RepoError {
    match e {
        WalkError::Odb(e) => RepoError::Odb(e),
        WalkError::NotACommit { oid, .. } => RepoError::Odb(git_odb::OdbError::Corrupt {
            oid,
            reason: "expected a commit".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn fetch_populates_remote_branch_and_objects() {
        let src_dir = tempfile::tempdir().unwrap();
        let dst_dir = tempfile::tempdir().unwrap();

        let src = Repository::init(src_dir.path()).unwrap();
        fs::write(src_dir.path().join("a.txt"), b"hello\n").unwrap();
        let oid = src.commit("one\n").unwrap();

        let dst = Repository::init(dst_dir.path()).unwrap();
        dst.fetch(src_dir.path().to_path_buf()).unwrap();

        let remote_master = RefName::new("refs/remote/master").unwrap();
        assert_eq!(dst.refs().get_oid(&remote_master, true).unwrap(), Some(oid));

        let walked = git_revwalk::walk_objects(dst.odb(), [oid]).unwrap();
        for obj_oid in walked {
            assert!(dst.odb().exists(&obj_oid));
        }
    }

    #[test]
    fn push_updates_remote_and_copies_objects() {
        let src_dir = tempfile::tempdir().unwrap();
        let dst_dir = tempfile::tempdir().unwrap();

        let src = Repository::init(src_dir.path()).unwrap();
        fs::write(src_dir.path().join("a.txt"), b"hello\n").unwrap();
        let oid = src.commit("one\n").unwrap();

        let dst = Repository::init(dst_dir.path()).unwrap();
        src.push(dst_dir.path().to_path_buf(), "refs/heads/master").unwrap();

        let master = RefName::new("refs/heads/master").unwrap();
        assert_eq!(dst.refs().get_oid(&master, true).unwrap(), Some(oid));
        assert!(dst.odb().exists(&oid));
    }
}
