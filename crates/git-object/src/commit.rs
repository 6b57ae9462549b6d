use git_hash::ObjectId;

use crate::ObjectError;

/// A commit object: a tree snapshot, its parents, and a message.
///
/// ugit commits carry no author, committer, or timestamp — only the
/// fields the header grammar names. Any other header key is a parse
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// OID of the root tree.
    pub tree: ObjectId,
    /// Parent commit OIDs, in header order (empty for the root commit).
    pub parents: Vec<ObjectId>,
    /// Commit message: everything after the blank line.
    pub message: Vec<u8>,
}

impl Commit {
    pub fn new(tree: ObjectId, parents: Vec<ObjectId>, message: Vec<u8>) -> Self {
        Self {
            tree,
            parents,
            message,
        }
    }

    /// Parse commit content from raw bytes (no object header).
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let mut tree: Option<ObjectId> = None;
        let mut parents = Vec::new();

        let mut pos = 0;
        loop {
            if pos >= content.len() {
                break;
            }
            if content[pos] == b'\n' {
                pos += 1;
                break;
            }

            let line_end = content[pos..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|p| p + pos)
                .unwrap_or(content.len());
            let line = &content[pos..line_end];

            let space_pos = line.iter().position(|&b| b == b' ').ok_or_else(|| {
                ObjectError::InvalidHeader("commit header missing value".into())
            })?;
            let key = &line[..space_pos];
            let value = &line[space_pos + 1..];

            match key {
                b"tree" => {
                    let hex = std::str::from_utf8(value)
                        .map_err(|_| ObjectError::InvalidHeader("non-UTF8 tree oid".into()))?;
                    if tree.is_some() {
                        return Err(ObjectError::InvalidHeader("duplicate tree header".into()));
                    }
                    tree = Some(ObjectId::from_hex(hex)?);
                }
                b"parent" => {
                    let hex = std::str::from_utf8(value)
                        .map_err(|_| ObjectError::InvalidHeader("non-UTF8 parent oid".into()))?;
                    parents.push(ObjectId::from_hex(hex)?);
                }
                other => {
                    return Err(ObjectError::InvalidHeader(format!(
                        "unknown commit header '{}'",
                        String::from_utf8_lossy(other)
                    )));
                }
            }

            pos = line_end + 1;
        }

        let tree = tree.ok_or(ObjectError::MissingCommitField { field: "tree" })?;
        let message = content[pos..].to_vec();

        Ok(Self {
            tree,
            parents,
            message,
        })
    }

    /// Serialize commit content to bytes (no object header).
    pub fn serialize_content(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend_from_slice(b"tree ");
        out.extend_from_slice(self.tree.to_hex().as_bytes());
        out.push(b'\n');

        for parent in &self.parents {
            out.extend_from_slice(b"parent ");
            out.extend_from_slice(parent.to_hex().as_bytes());
            out.push(b'\n');
        }

        out.push(b'\n');
        out.extend_from_slice(&self.message);
        out
    }

    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// The first line of the message.
    pub fn summary(&self) -> &[u8] {
        match self.message.iter().position(|&b| b == b'\n') {
            Some(pos) => &self.message[..pos],
            None => &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commit_bytes() -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\n");
        out.extend_from_slice(b"parent 0000000000000000000000000000000000000001\n");
        out.extend_from_slice(b"\n");
        out.extend_from_slice(b"Initial commit\n");
        out
    }

    #[test]
    fn parse_commit() {
        let commit = Commit::parse(&sample_commit_bytes()).unwrap();
        assert_eq!(
            commit.tree.to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(commit.parents.len(), 1);
        assert_eq!(commit.message, b"Initial commit\n");
    }

    #[test]
    fn parse_root_commit() {
        let data = b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\n\nroot\n";
        let commit = Commit::parse(data).unwrap();
        assert!(commit.is_root());
        assert!(!commit.is_merge());
    }

    #[test]
    fn parse_merge_commit() {
        let mut data = Vec::new();
        data.extend_from_slice(b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\n");
        data.extend_from_slice(b"parent 0000000000000000000000000000000000000001\n");
        data.extend_from_slice(b"parent 0000000000000000000000000000000000000002\n");
        data.extend_from_slice(b"\nMerge\n");

        let commit = Commit::parse(&data).unwrap();
        assert!(commit.is_merge());
        assert_eq!(commit.parents.len(), 2);
    }

    #[test]
    fn serialize_roundtrip() {
        let original_bytes = sample_commit_bytes();
        let commit = Commit::parse(&original_bytes).unwrap();
        let serialized = commit.serialize_content();
        assert_eq!(serialized, original_bytes);
    }

    #[test]
    fn summary_is_first_line() {
        let commit = Commit::parse(&sample_commit_bytes()).unwrap();
        assert_eq!(commit.summary(), b"Initial commit");
    }

    #[test]
    fn missing_tree_errors() {
        let data = b"\nmsg\n";
        assert!(matches!(
            Commit::parse(data),
            Err(ObjectError::MissingCommitField { field: "tree" })
        ));
    }

    #[test]
    fn unknown_header_key_errors() {
        let data = b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\nauthor someone\n\nmsg\n";
        assert!(matches!(
            Commit::parse(data),
            Err(ObjectError::InvalidHeader(_))
        ));
    }

    #[test]
    fn duplicate_tree_header_errors() {
        let data = b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\ntree da39a3ee5e6b4b0d3255bfef95601890afd80709\n\nmsg\n";
        assert!(Commit::parse(data).is_err());
    }

    #[test]
    fn parents_preserve_order() {
        let data = b"tree da39a3ee5e6b4b0d3255bfef95601890afd80709\nparent 0000000000000000000000000000000000000002\nparent 0000000000000000000000000000000000000001\n\nm\n";
        let commit = Commit::parse(data).unwrap();
        assert_eq!(
            commit.parents[0].to_hex(),
            "0000000000000000000000000000000000000002"
        );
        assert_eq!(
            commit.parents[1].to_hex(),
            "0000000000000000000000000000000000000001"
        );
    }
}
