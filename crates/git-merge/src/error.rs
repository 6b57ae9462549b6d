use git_hash::ObjectId;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("cannot merge {0}: current HEAD does not resolve to a commit")]
    NoHead(ObjectId),

    #[error("external tool '{tool}' failed with status {status}")]
    ExternalTool { tool: String, status: i32 },

    #[error(transparent)]
    Repo(#[from] git_repository::RepoError),

    #[error(transparent)]
    Odb(#[from] git_odb::OdbError),

    #[error(transparent)]
    Ref(#[from] git_ref::RefError),

    #[error(transparent)]
    Walk(#[from] git_revwalk::WalkError),

    #[error(transparent)]
    Util(#[from] git_utils::UtilError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
