//! Commit codec and the `commit` composite operation.

use git_hash::ObjectId;
use git_object::{Commit, Object, ObjectType};
use git_ref::{RefName, RefValue};

use crate::{RepoError, Repository};

impl Repository {
    /// Emit `tree <tree_oid>\n`, a `parent <p>\n` line per parent in
    /// order, a blank line, then the message, and store as `commit`.
    pub fn write_commit(
        &self,
        tree: ObjectId,
        parents: Vec<ObjectId>,
        message: Vec<u8>,
    ) -> Result<ObjectId, RepoError> {
        let commit = Commit::new(tree, parents, message);
        Ok(self.odb.write(&Object::Commit(commit))?)
    }

    /// Parse a stored commit object.
    pub fn read_commit(&self, oid: &ObjectId) -> Result<Commit, RepoError> {
        let obj = self.odb.read(oid)?;
        match obj {
            Object::Commit(c) => Ok(c),
            other => Err(RepoError::Odb(git_odb::OdbError::TypeMismatch {
                oid: *oid,
                expected: ObjectType::Commit,
                actual: other.object_type(),
            })),
        }
    }

    /// Write the current working tree, form a commit from `HEAD` and
    /// (if present) `MERGE_HEAD` as parents, advance `HEAD`, and consume
    /// `MERGE_HEAD` if it was used.
    pub fn commit(&self, message: impl Into<Vec<u8>>) -> Result<ObjectId, RepoError> {
        let tree = self.write_tree(&self.worktree)?;

        let mut parents = Vec::new();
        if let Some(head) = self.head_oid()? {
            parents.push(head);
        }
        let merge_head = self.merge_head_oid()?;
        if let Some(other) = merge_head {
            parents.push(other);
        }

        let oid = self.write_commit(tree, parents, message.into())?;

        let head_name = RefName::new("HEAD")?;
        self.refs.update(&head_name, &RefValue::direct(oid), true)?;

        if merge_head.is_some() {
            let merge_head_name = RefName::new("MERGE_HEAD")?;
            self.refs.delete(&merge_head_name, false)?;
        }

        Ok(oid)
    }
}
