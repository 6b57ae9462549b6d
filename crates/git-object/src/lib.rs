//! ugit's object model: blob, tree, and commit parsing and serialization.
//!
//! Every object is stored as `type || 0x00 || payload` — no length field,
//! no compression. This crate provides the Rust types for the three object
//! kinds, parsing from those raw bytes, and serialization back to the same
//! canonical form so that re-serializing a parsed object always reproduces
//! its original oid.

mod blob;
pub mod cache;
mod commit;
pub mod header;
mod tree;

pub use blob::Blob;
pub use commit::Commit;
pub use tree::{EntryKind, Tree, TreeEntry};

use git_hash::{HashError, ObjectId};

/// Errors produced by object operations.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("invalid object type: {0}")]
    InvalidType(String),

    #[error("invalid object header: {0}")]
    InvalidHeader(String),

    #[error("invalid tree entry at offset {offset}: {reason}")]
    InvalidTreeEntry { offset: usize, reason: String },

    #[error("invalid commit: missing '{field}' header")]
    MissingCommitField { field: &'static str },

    #[error(transparent)]
    Hash(#[from] HashError),
}

/// The object kinds ugit stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    /// Parse from the type string in an object header.
    pub fn from_bytes(s: &[u8]) -> Result<Self, ObjectError> {
        match s {
            b"blob" => Ok(Self::Blob),
            b"tree" => Ok(Self::Tree),
            b"commit" => Ok(Self::Commit),
            _ => Err(ObjectError::InvalidType(String::from_utf8_lossy(s).into())),
        }
    }

    /// The canonical byte representation.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Self::Blob => b"blob",
            Self::Tree => b"tree",
            Self::Commit => b"commit",
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
        })
    }
}

impl std::str::FromStr for ObjectType {
    type Err = ObjectError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

/// A parsed object of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

impl Object {
    /// Parse from raw stored bytes (header + payload).
    pub fn parse(data: &[u8]) -> Result<Self, ObjectError> {
        let (obj_type, header_len) = header::parse_header(data)?;
        Self::parse_content(obj_type, &data[header_len..])
    }

    /// Parse payload bytes with a known type (no header).
    pub fn parse_content(obj_type: ObjectType, content: &[u8]) -> Result<Self, ObjectError> {
        match obj_type {
            ObjectType::Blob => Ok(Self::Blob(Blob::parse(content)?)),
            ObjectType::Tree => Ok(Self::Tree(Tree::parse(content)?)),
            ObjectType::Commit => Ok(Self::Commit(Commit::parse(content)?)),
        }
    }

    /// Serialize to the on-disk form: header + payload.
    pub fn serialize(&self) -> Vec<u8> {
        let content = self.serialize_content();
        let mut out = header::write_header(self.object_type());
        out.extend_from_slice(&content);
        out
    }

    /// Serialize just the payload (no header).
    pub fn serialize_content(&self) -> Vec<u8> {
        match self {
            Self::Blob(b) => b.serialize_content().to_vec(),
            Self::Tree(t) => t.serialize_content(),
            Self::Commit(c) => c.serialize_content(),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::Blob(_) => ObjectType::Blob,
            Self::Tree(_) => ObjectType::Tree,
            Self::Commit(_) => ObjectType::Commit,
        }
    }

    /// Compute the oid by hashing the header-tagged serialized form.
    pub fn compute_oid(&self) -> ObjectId {
        let content = self.serialize_content();
        git_hash::hasher::Hasher::hash_object(self.object_type().to_string().as_str(), &content)
    }

    /// Size of the payload, excluding the header.
    pub fn content_size(&self) -> usize {
        self.serialize_content().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_type_from_bytes() {
        assert_eq!(ObjectType::from_bytes(b"blob").unwrap(), ObjectType::Blob);
        assert_eq!(ObjectType::from_bytes(b"tree").unwrap(), ObjectType::Tree);
        assert_eq!(
            ObjectType::from_bytes(b"commit").unwrap(),
            ObjectType::Commit
        );
        assert!(ObjectType::from_bytes(b"tag").is_err());
    }

    #[test]
    fn object_type_display() {
        assert_eq!(ObjectType::Blob.to_string(), "blob");
        assert_eq!(ObjectType::Commit.to_string(), "commit");
    }

    #[test]
    fn object_type_from_str() {
        assert_eq!("tree".parse::<ObjectType>().unwrap(), ObjectType::Tree);
        assert!("invalid".parse::<ObjectType>().is_err());
    }

    #[test]
    fn roundtrip_blob_through_object() {
        let obj = Object::Blob(Blob::new(b"hello".to_vec()));
        let serialized = obj.serialize();
        let parsed = Object::parse(&serialized).unwrap();
        assert_eq!(obj, parsed);
    }

    #[test]
    fn compute_oid_matches_hasher() {
        let obj = Object::Blob(Blob::new(b"hello".to_vec()));
        let oid = obj.compute_oid();
        assert_eq!(
            oid,
            git_hash::hasher::Hasher::hash_object("blob", b"hello")
        );
    }
}
