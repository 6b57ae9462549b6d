//! Repository context: locates the on-disk `.ugit` directory and ties the
//! object store, reference store, and index together as one value.
//!
//! The source binds the active repository directory as a mutable
//! process-global with scoped save/restore. That does not translate well
//! to a statically typed language, so here a [`Repository`] is an explicit
//! value: replication against a remote simply constructs a second
//! `Repository` bound to the remote's path ([`Repository::at`]) rather
//! than rebinding a global.

mod commit;
mod error;
mod replicate;
mod resolve;
mod tree;
mod worktree;

pub use error::RepoError;
pub use tree::FlatEntry;

use std::path::{Path, PathBuf};

use git_hash::ObjectId;
use git_index::Index;
use git_odb::ObjectDatabase;
use git_ref::{FilesRefStore, RefName, RefValue};

/// Name of the repository metadata directory inside a working tree.
pub const REPO_DIR_NAME: &str = ".ugit";

/// A repository: a working tree root plus the `.ugit` directory beneath
/// it, and handles onto the object store, reference store, and index
/// path that live there.
pub struct Repository {
    worktree: PathBuf,
    repo_dir: PathBuf,
    odb: ObjectDatabase,
    refs: FilesRefStore,
    index_path: PathBuf,
}

impl Repository {
    /// Initialize a new repository rooted at `worktree`. Safe to call
    /// again on an already-initialized repository: an existing `HEAD` is
    /// left untouched.
    pub fn init(worktree: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let worktree = worktree.into();
        let repo_dir = worktree.join(REPO_DIR_NAME);

        std::fs::create_dir_all(repo_dir.join("objects"))?;
        std::fs::create_dir_all(repo_dir.join("refs").join("heads"))?;
        std::fs::create_dir_all(repo_dir.join("refs").join("tags"))?;
        std::fs::create_dir_all(repo_dir.join("refs").join("remote"))?;

        let odb = ObjectDatabase::open(repo_dir.join("objects"))?;
        let refs = FilesRefStore::new(&repo_dir);

        let head = RefName::new("HEAD")?;
        if refs.get(&head, false)?.is_absent() {
            let master = RefName::new("refs/heads/master")?;
            refs.update(&head, &RefValue::symbolic(master), false)?;
        }

        Ok(Repository {
            index_path: repo_dir.join("index"),
            worktree,
            repo_dir,
            odb,
            refs,
        })
    }

    /// Open the repository rooted at the current working directory. The
    /// active repository root is always `<cwd>/.ugit`; there is no
    /// environment override and no upward directory search.
    pub fn discover() -> Result<Self, RepoError> {
        Self::at(std::env::current_dir()?)
    }

    /// Bind a `Repository` to an arbitrary working tree root, requiring
    /// that its `.ugit` directory already exists. This is also how a
    /// remote repository is addressed during fetch/push: a second
    /// `Repository` value bound to the remote's path, standing in for the
    /// source's scoped `repo_dir` rebinding.
    pub fn at(worktree: impl Into<PathBuf>) -> Result<Self, RepoError> {
        let worktree = worktree.into();
        let repo_dir = worktree.join(REPO_DIR_NAME);
        if !repo_dir.join("HEAD").is_file() {
            return Err(RepoError::NotARepository(worktree));
        }

        let odb = ObjectDatabase::open(repo_dir.join("objects"))?;
        let refs = FilesRefStore::new(&repo_dir);

        Ok(Repository {
            index_path: repo_dir.join("index"),
            worktree,
            repo_dir,
            odb,
            refs,
        })
    }

    pub fn worktree(&self) -> &Path {
        &self.worktree
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn odb(&self) -> &ObjectDatabase {
        &self.odb
    }

    pub fn refs(&self) -> &FilesRefStore {
        &self.refs
    }

    /// Name of this working tree's `.ugit` directory, used by the ignore
    /// rule: any path segment equal to this basename is ignored.
    pub fn ignore_basename(&self) -> &str {
        REPO_DIR_NAME
    }

    /// Scoped acquisition over the staging index: load it (or default to
    /// empty), hand it to `body`, then persist on every exit path.
    pub fn with_index<T>(
        &self,
        body: impl FnOnce(&mut Index) -> Result<T, RepoError>,
    ) -> Result<T, RepoError> {
        let mut index = git_index::read_from(&self.index_path)?;
        let result = body(&mut index);
        git_index::write_to(&self.index_path, &index)?;
        result
    }

    pub fn head_oid(&self) -> Result<Option<ObjectId>, RepoError> {
        let head = RefName::new("HEAD")?;
        Ok(self.refs.get_oid(&head, true)?)
    }

    pub fn merge_head_oid(&self) -> Result<Option<ObjectId>, RepoError> {
        let merge_head = RefName::new("MERGE_HEAD")?;
        Ok(self.refs.get_oid(&merge_head, true)?)
    }
}
