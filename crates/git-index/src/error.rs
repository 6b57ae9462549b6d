/// Error type for index store operations.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("invalid oid for path '{path}': {source}")]
    InvalidOid {
        path: String,
        #[source]
        source: git_hash::HashError,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Util(#[from] git_utils::UtilError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
