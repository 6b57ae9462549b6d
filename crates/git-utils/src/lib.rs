//! Foundation utilities shared by every ugit crate: byte-string paths,
//! atomic lock-file and temp-file writes, and external subprocess
//! invocation (used to shell out to the line-diff tool).

pub mod bstring;
pub mod error;
pub mod lockfile;
pub mod path;
pub mod subprocess;
pub mod tempfile;

// Re-export core types at crate root for convenience
pub use bstr::{BStr, BString, ByteSlice, ByteVec};
pub use error::{LockError, UtilError};

pub type Result<T> = std::result::Result<T, UtilError>;
