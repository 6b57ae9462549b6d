//! Three-way blob merge via an external line-diff tool.
//!
//! Writes the two non-base sides to temporary files and invokes `diff
//! -DHEAD`, which emits a single file with `#ifdef`/`#else`/`#endif`
//! conflict markers keyed on the label `HEAD` wherever the two sides
//! differ. The base content isn't fed to the tool — `-D` computes a
//! two-way ifdef merge, not a true three-way diff — but the parameter is
//! kept for API symmetry with the tree-level merge that calls this once
//! per path.

use std::fs;

use git_utils::subprocess::{GitCommand, StdioMode};

use crate::MergeError;

/// Merge `head` and `other`, ignoring `base`. A missing side is treated as
/// an empty byte stream.
pub fn merge_blobs(
    _base: Option<&[u8]>,
    head: Option<&[u8]>,
    other: Option<&[u8]>,
) -> Result<Vec<u8>, MergeError> {
    let dir = tempfile::tempdir()?;
    let head_path = dir.path().join("head");
    let other_path = dir.path().join("other");
    fs::write(&head_path, head.unwrap_or(&[]))?;
    fs::write(&other_path, other.unwrap_or(&[]))?;

    let result = GitCommand::new("diff")
        .arg("-DHEAD")
        .arg(&head_path)
        .arg(&other_path)
        .stdout(StdioMode::Pipe)
        .stderr(StdioMode::Pipe)
        .run()?;

    // `diff` exits 0 for "no differences" and 1 for "differences found";
    // only a status above that signals a real failure.
    if let Some(code) = result.status.code() {
        if code > 1 {
            return Err(MergeError::ExternalTool {
                tool: "diff".into(),
                status: code,
            });
        }
    }

    Ok(result.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sides_produce_no_markers() {
        let merged = merge_blobs(None, Some(b"same\n"), Some(b"same\n")).unwrap();
        assert_eq!(merged, b"same\n");
    }

    #[test]
    fn differing_sides_produce_conflict_markers() {
        let merged = merge_blobs(None, Some(b"ours\n"), Some(b"theirs\n")).unwrap();
        let text = String::from_utf8_lossy(&merged);
        assert!(text.contains("HEAD"));
        assert!(text.contains("ours"));
        assert!(text.contains("theirs"));
    }

    #[test]
    fn missing_side_treated_as_empty() {
        let merged = merge_blobs(None, None, Some(b"theirs\n")).unwrap();
        let text = String::from_utf8_lossy(&merged);
        assert!(text.contains("theirs"));
    }
}
