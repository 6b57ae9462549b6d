//! Reference namespace: symbolic/direct indirection over named pointers.
//!
//! A reference is a single file holding either `ref: <name>\n` (symbolic)
//! or an oid (direct). [`FilesRefStore`] is the only backend — no
//! packed-refs, no reflog, no compare-and-swap. `HEAD` and `MERGE_HEAD`
//! live at the repository root; branches, tags, and remote mirrors live
//! under `refs/heads/`, `refs/tags/`, and `refs/remote/`.

mod error;
mod name;
mod store;

pub use error::RefError;
pub use name::RefName;
pub use store::{FilesRefStore, RefTarget, RefValue};
