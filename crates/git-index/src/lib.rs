//! Staging index: a path→oid map persisted as a single JSON document at
//! `<repo>/index`. Sits between the working tree and the object database,
//! recording what the next commit will contain.
//!
//! There is no concurrency control here. The index is acquired, mutated,
//! and persisted within a single scoped call ([`with_index`]); callers are
//! responsible for not running two of these against the same repository at
//! once.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use git_hash::ObjectId;

mod error;

pub use error::IndexError;

/// The staged path→oid map.
///
/// Backed by a `BTreeMap` so iteration and serialization are always in
/// sorted path order, matching the tree codec's own ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, path: &str) -> Option<ObjectId> {
        self.entries.get(path).copied()
    }

    pub fn insert(&mut self, path: impl Into<String>, oid: ObjectId) {
        self.entries.insert(path.into(), oid);
    }

    pub fn remove(&mut self, path: &str) -> Option<ObjectId> {
        self.entries.remove(path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ObjectId)> {
        self.entries.iter().map(|(p, oid)| (p.as_str(), *oid))
    }

    /// Replace the whole staged snapshot, e.g. from `scan_working_tree()`
    /// or a tree's `flatten()`.
    pub fn set_all(&mut self, entries: BTreeMap<String, ObjectId>) {
        self.entries = entries;
    }

    fn to_json(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(p, oid)| (p.clone(), oid.to_hex()))
            .collect()
    }

    fn from_json(raw: BTreeMap<String, String>) -> Result<Self, IndexError> {
        let mut entries = BTreeMap::new();
        for (path, hex) in raw {
            let oid = ObjectId::from_hex(&hex).map_err(|source| IndexError::InvalidOid {
                path: path.clone(),
                source,
            })?;
            entries.insert(path, oid);
        }
        Ok(Index { entries })
    }
}

/// Load the index document at `path`, or an empty index if the file does
/// not exist.
pub fn read_from(path: &Path) -> Result<Index, IndexError> {
    match std::fs::read(path) {
        Ok(bytes) => {
            if bytes.is_empty() {
                return Ok(Index::new());
            }
            let raw: BTreeMap<String, String> = serde_json::from_slice(&bytes)?;
            Index::from_json(raw)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Index::new()),
        Err(e) => Err(e.into()),
    }
}

/// Persist `index` to `path` atomically (write to a temp file in the same
/// directory, then rename over the target).
pub fn write_to(path: &Path, index: &Index) -> Result<(), IndexError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let json = serde_json::to_vec_pretty(&index.to_json())?;
    let mut tmp = git_utils::tempfile::TempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.persist(path)?;
    Ok(())
}

/// Scoped acquisition: load the index at `path` (or an empty one), hand it
/// to `body`, then persist it on every exit path, including when `body`
/// returns an error.
pub fn with_index<T>(
    path: &Path,
    body: impl FnOnce(&mut Index) -> Result<T, IndexError>,
) -> Result<T, IndexError> {
    let mut index = read_from(path)?;
    let result = body(&mut index);
    write_to(path, &index)?;
    result
}
