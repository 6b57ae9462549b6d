use std::path::PathBuf;

use git_hash::ObjectId;

/// Errors surfaced by repository-level operations.
///
/// Mirrors the error kinds named by the core: `not-found`, `type-mismatch`,
/// `invalid-object`, `unknown-name`, `invalid-state`, `io-failure`, and
/// `external-tool-failure`. The core never attempts recovery — every error
/// here is fatal to the operation that raised it.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not a repository: '{0}' has no .ugit directory")]
    NotARepository(PathBuf),

    #[error("repository already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("unknown name: '{0}'")]
    UnknownName(String),

    #[error("invalid entry name '{0}' in tree")]
    InvalidName(String),

    #[error("HEAD does not resolve to a commit")]
    NoHead,

    #[error("merge requires a resolvable HEAD")]
    MergeWithoutHead,

    #[error("ref '{0}' does not resolve to an oid")]
    RefNotAnOid(String),

    #[error("external tool '{tool}' failed with status {status}")]
    ExternalTool { tool: String, status: i32 },

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),

    #[error(transparent)]
    Ref(#[from] git_ref::RefError),

    #[error(transparent)]
    Index(#[from] git_index::IndexError),

    #[error(transparent)]
    Hash(#[from] git_hash::HashError),

    #[error(transparent)]
    Util(#[from] git_utils::UtilError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RepoError {
    pub fn not_found(oid: ObjectId) -> Self {
        RepoError::Odb(git_odb::OdbError::NotFound(oid))
    }
}
