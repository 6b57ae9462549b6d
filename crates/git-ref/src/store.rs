//! Files-backed reference store.
//!
//! Every ref is a single file at `<repo>/<name>`: symbolic refs hold
//! `ref: <target>\n`, direct refs hold the oid text. [`FilesRefStore::get`]
//! with `deref = true` follows the chain to its end; with `deref = false`
//! it reads exactly the named file, which is how checkout distinguishes
//! "follow the branch" from "rewrite the pointer itself".

use std::collections::HashSet;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use git_hash::ObjectId;

use crate::error::RefError;
use crate::name::RefName;

/// Bound on symbolic-ref chain length, purely to turn an accidental cycle
/// into an error instead of an infinite loop.
const MAX_SYMREF_DEPTH: usize = 16;

/// Either a direct oid or the name of another ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    Oid(ObjectId),
    Name(RefName),
}

/// The result of a ref lookup: mirrors `RefValue(symbolic, value)`.
///
/// `symbolic` is only ever true for a single-step (`deref = false`) read
/// of a symbolic ref; a fully dereferenced lookup always lands on a
/// direct oid or on absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefValue {
    pub symbolic: bool,
    pub target: Option<RefTarget>,
}

impl RefValue {
    pub fn direct(oid: ObjectId) -> Self {
        Self {
            symbolic: false,
            target: Some(RefTarget::Oid(oid)),
        }
    }

    pub fn symbolic(name: RefName) -> Self {
        Self {
            symbolic: true,
            target: Some(RefTarget::Name(name)),
        }
    }

    pub fn absent() -> Self {
        Self {
            symbolic: false,
            target: None,
        }
    }

    pub fn oid(&self) -> Option<ObjectId> {
        match &self.target {
            Some(RefTarget::Oid(oid)) => Some(*oid),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.target.is_none()
    }
}

/// Reads and writes references as individual files under a repository
/// directory. There is no packed-refs, no reflog, and no compare-and-swap:
/// correct use assumes a single writer.
pub struct FilesRefStore {
    repo_dir: PathBuf,
}

impl FilesRefStore {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    fn path_for(&self, name: &RefName) -> PathBuf {
        self.repo_dir.join(name.as_str())
    }

    fn read_raw(&self, name: &RefName) -> Result<RefValue, RefError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let content = content.trim_end_matches('\n').trim();
                if let Some(target) = content.strip_prefix("ref: ") {
                    Ok(RefValue::symbolic(RefName::new(target.trim())?))
                } else {
                    Ok(RefValue::direct(ObjectId::from_hex(content)?))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RefValue::absent()),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve `name`. `deref = false` reads exactly the named file,
    /// carrying the symbolic flag and raw target. `deref = true` follows
    /// symbolic chains to their end (a direct value, or absence).
    pub fn get(&self, name: &RefName, deref: bool) -> Result<RefValue, RefError> {
        if !deref {
            return self.read_raw(name);
        }

        let mut current = name.clone();
        let mut seen = HashSet::new();
        loop {
            if !seen.insert(current.clone()) || seen.len() > MAX_SYMREF_DEPTH {
                return Err(RefError::SymrefLoop(name.to_string()));
            }
            match self.read_raw(&current)?.target {
                Some(RefTarget::Name(next)) => current = next,
                Some(RefTarget::Oid(oid)) => return Ok(RefValue::direct(oid)),
                None => return Ok(RefValue::absent()),
            }
        }
    }

    /// Resolve straight to an oid, fully dereferenced.
    pub fn get_oid(&self, name: &RefName, deref: bool) -> Result<Option<ObjectId>, RefError> {
        Ok(self.get(name, deref)?.oid())
    }

    /// Write `value` to `name`.
    ///
    /// `deref = true` rewrites the final target of `name`'s symbolic chain
    /// (committing on a checked-out branch advances the branch, not
    /// `HEAD` itself); `deref = false` rewrites `name` verbatim (checkout
    /// of a branch re-points `HEAD`'s own symbolic target; a detached
    /// checkout instead writes an oid straight into `HEAD`).
    pub fn update(&self, name: &RefName, value: &RefValue, deref: bool) -> Result<(), RefError> {
        let Some(target) = &value.target else {
            return Err(RefError::EmptyValue);
        };

        let target_name = if deref {
            self.final_name(name)?
        } else {
            name.clone()
        };

        let path = self.path_for(&target_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = match target {
            RefTarget::Oid(oid) => format!("{oid}\n"),
            RefTarget::Name(target) => format!("ref: {target}\n"),
        };

        match git_utils::lockfile::LockFile::acquire(&path) {
            Ok(mut lock) => {
                lock.write_all(contents.as_bytes())?;
                lock.commit()?;
            }
            Err(_) => {
                // A stale `.lock` file from an earlier crashed run must not
                // wedge every future ref update; since the core promises
                // only single-writer use, write straight through.
                fs::write(&path, contents)?;
            }
        }
        Ok(())
    }

    /// Delete `name`. `deref = true` deletes the final target of the
    /// symbolic chain; `deref = false` deletes `name` itself — the only
    /// way to remove `MERGE_HEAD` or a symbolic ref without touching what
    /// it points at.
    pub fn delete(&self, name: &RefName, deref: bool) -> Result<(), RefError> {
        let target_name = if deref {
            self.final_name(name)?
        } else {
            name.clone()
        };
        match fs::remove_file(self.path_for(&target_name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The name a symbolic chain ultimately bottoms out at (itself, if
    /// `name` is already direct or absent).
    fn final_name(&self, name: &RefName) -> Result<RefName, RefError> {
        let mut current = name.clone();
        let mut seen = HashSet::new();
        loop {
            if !seen.insert(current.clone()) || seen.len() > MAX_SYMREF_DEPTH {
                return Err(RefError::SymrefLoop(name.to_string()));
            }
            match self.read_raw(&current)?.target {
                Some(RefTarget::Name(next)) => current = next,
                _ => return Ok(current),
            }
        }
    }

    /// Enumerate `HEAD`, `MERGE_HEAD`, and everything under `refs/`, fully
    /// dereferenced, filtered to names starting with `prefix` and present
    /// (non-absent) values. Sorted by name.
    pub fn iter(&self, prefix: &str) -> Result<Vec<(RefName, RefValue)>, RefError> {
        let mut names = vec![RefName::new("HEAD")?, RefName::new("MERGE_HEAD")?];
        let refs_dir = self.repo_dir.join("refs");
        if refs_dir.is_dir() {
            collect_ref_files(&self.repo_dir, &refs_dir, &mut names)?;
        }

        let mut out = Vec::new();
        for name in names {
            if !name.as_str().starts_with(prefix) {
                continue;
            }
            let value = self.get(&name, true)?;
            if !value.is_absent() {
                out.push((name, value));
            }
        }
        out.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(out)
    }
}

fn collect_ref_files(root: &Path, dir: &Path, out: &mut Vec<RefName>) -> Result<(), RefError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_ref_files(root, &path, out)?;
        } else if let Ok(rel) = path.strip_prefix(root) {
            if let Some(s) = rel.to_str() {
                if let Ok(name) = RefName::new(s.replace('\\', "/")) {
                    out.push(name);
                }
            }
        }
    }
    Ok(())
}
