use std::cmp::Ordering;

use git_hash::ObjectId;

use crate::ObjectError;

/// What a tree entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Blob,
    Tree,
}

impl EntryKind {
    fn from_bytes(s: &[u8]) -> Result<Self, ObjectError> {
        match s {
            b"blob" => Ok(Self::Blob),
            b"tree" => Ok(Self::Tree),
            other => Err(ObjectError::InvalidTreeEntry {
                offset: 0,
                reason: format!("unknown entry kind '{}'", String::from_utf8_lossy(other)),
            }),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
        }
    }
}

/// A single entry in a tree object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub kind: EntryKind,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    pub fn is_tree(&self) -> bool {
        matches!(self.kind, EntryKind::Tree)
    }

    pub fn is_blob(&self) -> bool {
        matches!(self.kind, EntryKind::Blob)
    }
}

impl PartialOrd for TreeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TreeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Is `name` a valid tree entry name: non-empty, no path separator, and
/// not `.` or `..`?
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && name != "." && name != ".."
}

/// A tree object — a flat directory listing, one line per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse tree content: one `"<kind> <oid> <name>\n"` line per entry.
    pub fn parse(content: &[u8]) -> Result<Self, ObjectError> {
        let mut entries = Vec::new();
        let mut offset = 0;

        for line in content.split(|&b| b == b'\n') {
            if line.is_empty() {
                offset += 1;
                continue;
            }

            let mut parts = line.splitn(3, |&b| b == b' ');
            let kind_bytes = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing entry kind".into(),
            })?;
            let oid_bytes = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing oid".into(),
            })?;
            let name_bytes = parts.next().ok_or_else(|| ObjectError::InvalidTreeEntry {
                offset,
                reason: "missing name".into(),
            })?;

            let kind = EntryKind::from_bytes(kind_bytes).map_err(|_| {
                ObjectError::InvalidTreeEntry {
                    offset,
                    reason: format!(
                        "unknown entry kind '{}'",
                        String::from_utf8_lossy(kind_bytes)
                    ),
                }
            })?;

            let oid_hex = std::str::from_utf8(oid_bytes).map_err(|_| {
                ObjectError::InvalidTreeEntry {
                    offset,
                    reason: "non-UTF8 oid".into(),
                }
            })?;
            let oid = ObjectId::from_hex(oid_hex)?;

            let name = std::str::from_utf8(name_bytes)
                .map_err(|_| ObjectError::InvalidTreeEntry {
                    offset,
                    reason: "non-UTF8 name".into(),
                })?
                .to_string();
            if !is_valid_name(&name) {
                return Err(ObjectError::InvalidTreeEntry {
                    offset,
                    reason: format!("invalid entry name '{name}'"),
                });
            }

            offset += line.len() + 1;
            entries.push(TreeEntry { kind, name, oid });
        }

        Ok(Self { entries })
    }

    /// Serialize tree content, one line per entry, sorted by name.
    pub fn serialize_content(&self) -> Vec<u8> {
        let mut sorted = self.entries.clone();
        sorted.sort();

        let mut out = Vec::new();
        for entry in &sorted {
            out.extend_from_slice(entry.kind.as_str().as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.oid.to_hex().as_bytes());
            out.push(b' ');
            out.extend_from_slice(entry.name.as_bytes());
            out.push(b'\n');
        }
        out
    }

    pub fn sort(&mut self) {
        self.entries.sort();
    }

    pub fn find(&self, name: &str) -> Option<&TreeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
