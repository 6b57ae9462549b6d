//! Working-tree scanning, wiping, and restoring.
//!
//! A path is ignored iff any of its `/`-separated segments equals the
//! repository directory basename (`.ugit`). Symlinks are never followed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use git_hash::hasher::Hasher;
use git_hash::ObjectId;

use crate::{RepoError, Repository};

fn is_ignored(rel: &Path, basename: &str) -> bool {
    rel.components()
        .any(|c| c.as_os_str().to_str() == Some(basename))
}

impl Repository {
    /// Walk the working tree, skipping ignored paths and non-regular
    /// files, and return each path's blob oid. Contents are hashed but not
    /// persisted to the object store — only `write_tree` does that.
    ///
    /// Descends with an explicit worklist rather than call recursion, so a
    /// deep directory tree can't blow the stack.
    pub fn scan_working_tree(&self) -> Result<BTreeMap<String, ObjectId>, RepoError> {
        let root = &self.worktree;
        let basename = self.ignore_basename();
        let mut out = BTreeMap::new();
        let mut stack = vec![root.clone()];

        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                let rel = path.strip_prefix(root).unwrap_or(&path);
                if is_ignored(rel, basename) {
                    continue;
                }

                let file_type = entry.file_type()?;
                if file_type.is_symlink() {
                    continue;
                } else if file_type.is_dir() {
                    stack.push(path);
                } else if file_type.is_file() {
                    let bytes = fs::read(&path)?;
                    let oid = Hasher::hash_object("blob", &bytes);
                    let rel_str = rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
                    out.insert(rel_str, oid);
                }
            }
        }

        Ok(out)
    }

    /// Bottom-up wipe: remove every non-ignored regular file, then attempt
    /// to remove each non-ignored directory, tolerating failure when it
    /// still contains ignored content (e.g. `.ugit`).
    ///
    /// Directories are discovered with an explicit worklist (avoiding call
    /// recursion); files are removed as each directory is visited, and
    /// directories are then removed in reverse discovery order so every
    /// descendant has already been cleared before its parent is attempted.
    pub fn empty_working_tree(&self) -> Result<(), RepoError> {
        let root = &self.worktree;
        let basename = self.ignore_basename();
        let mut discovery_order = Vec::new();
        let mut stack = vec![root.clone()];

        while let Some(dir) = stack.pop() {
            discovery_order.push(dir.clone());

            for entry in fs::read_dir(&dir)? {
                let entry = entry?;
                let path = entry.path();
                let rel = path.strip_prefix(root).unwrap_or(&path);
                if is_ignored(rel, basename) {
                    continue;
                }

                let file_type = entry.file_type()?;
                if file_type.is_dir() {
                    stack.push(path);
                } else {
                    fs::remove_file(&path)?;
                }
            }
        }

        for dir in discovery_order.into_iter().rev() {
            if dir == *root {
                continue;
            }
            // Tolerate failure: the directory may still hold ignored content.
            let _ = fs::remove_dir(&dir);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_ignored_dir_and_hashes_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        fs::write(dir.path().join("a.txt"), b"hello\n").unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), b"world\n").unwrap();

        let scanned = repo.scan_working_tree().unwrap();
        assert_eq!(scanned.len(), 2);
        assert_eq!(
            scanned.get("a.txt").copied(),
            Some(Hasher::hash_object("blob", b"hello\n"))
        );
        assert!(scanned.contains_key("sub/b.txt"));
        assert!(!scanned.keys().any(|k| k.contains(".ugit")));
    }

    #[test]
    fn empty_working_tree_removes_non_ignored_content() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        fs::write(dir.path().join("a.txt"), b"hi\n").unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), b"bye\n").unwrap();

        repo.empty_working_tree().unwrap();

        assert!(!dir.path().join("a.txt").exists());
        assert!(!dir.path().join("sub").exists());
        assert!(dir.path().join(".ugit").join("HEAD").is_file());
    }
}
