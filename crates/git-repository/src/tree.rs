//! Tree codec: serialize a directory snapshot into a tree object, and
//! expand/restore a tree oid back onto disk.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use git_hash::ObjectId;
use git_object::{EntryKind, Object, ObjectType, Tree, TreeEntry};

use crate::{RepoError, Repository};

/// One entry of a parsed tree: the kind of object it points at, its oid,
/// and its single path-component name.
pub struct FlatEntry {
    pub kind: EntryKind,
    pub oid: ObjectId,
    pub name: String,
}

impl Repository {
    /// Scan `dir` (not following symlinks, skipping ignored paths),
    /// hashing files as blobs and descending into subdirectories, and
    /// store the result as a `tree` object. Entries are sorted by name on
    /// serialization.
    ///
    /// Directory discovery uses an explicit worklist rather than call
    /// recursion, so a deep directory tree can't blow the stack; each
    /// directory's own tree object is then built bottom-up once every
    /// subdirectory beneath it has one.
    pub fn write_tree(&self, dir: &Path) -> Result<ObjectId, RepoError> {
        let mut discovery_order = Vec::new();
        let mut subdirs: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
        let mut file_entries: HashMap<PathBuf, Vec<(String, ObjectId)>> = HashMap::new();

        let mut stack = vec![dir.to_path_buf()];
        while let Some(current) = stack.pop() {
            discovery_order.push(current.clone());

            let mut children = Vec::new();
            let mut files = Vec::new();
            for entry in fs::read_dir(&current)? {
                let entry = entry?;
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().into_owned();
                if name == self.ignore_basename() {
                    continue;
                }

                let file_type = entry.file_type()?;
                if file_type.is_symlink() {
                    continue;
                } else if file_type.is_dir() {
                    children.push(path.clone());
                    stack.push(path);
                } else if file_type.is_file() {
                    let bytes = fs::read(&path)?;
                    let oid = self.odb.put(&bytes, ObjectType::Blob)?;
                    files.push((name, oid));
                }
            }
            subdirs.insert(current.clone(), children);
            file_entries.insert(current, files);
        }

        // A directory is discovered strictly after its parent, so walking
        // the discovery order in reverse guarantees every subdirectory's
        // tree oid is known before its parent's is built.
        let mut tree_oids: HashMap<PathBuf, ObjectId> = HashMap::new();
        for current in discovery_order.into_iter().rev() {
            let mut entries: Vec<TreeEntry> = file_entries
                .remove(&current)
                .unwrap_or_default()
                .into_iter()
                .map(|(name, oid)| TreeEntry {
                    kind: EntryKind::Blob,
                    name,
                    oid,
                })
                .collect();

            for sub in subdirs.remove(&current).unwrap_or_default() {
                let name = sub
                    .file_name()
                    .expect("directory entries always have a file name")
                    .to_string_lossy()
                    .into_owned();
                let oid = tree_oids[&sub];
                entries.push(TreeEntry {
                    kind: EntryKind::Tree,
                    name,
                    oid,
                });
            }

            let mut tree = Tree { entries };
            tree.sort();
            let oid = self.odb.write(&Object::Tree(tree))?;
            tree_oids.insert(current, oid);
        }

        Ok(tree_oids[dir])
    }

    /// Parse a tree object into its entries.
    pub fn read_tree_entries(&self, oid: &ObjectId) -> Result<Vec<FlatEntry>, RepoError> {
        let obj = self.odb.read(oid)?;
        let Object::Tree(tree) = obj else {
            return Err(RepoError::Odb(git_odb::OdbError::TypeMismatch {
                oid: *oid,
                expected: ObjectType::Tree,
                actual: obj.object_type(),
            }));
        };
        Ok(tree
            .entries
            .into_iter()
            .map(|e| FlatEntry {
                kind: e.kind,
                oid: e.oid,
                name: e.name,
            })
            .collect())
    }

    /// Expand a tree into a path-keyed map of blob oids, descending into
    /// subtrees with an explicit worklist instead of call recursion.
    pub fn flatten(&self, oid: &ObjectId) -> Result<BTreeMap<String, ObjectId>, RepoError> {
        let mut out = BTreeMap::new();
        let mut stack = vec![(*oid, String::new())];

        while let Some((oid, base)) = stack.pop() {
            for entry in self.read_tree_entries(&oid)? {
                let path = if base.is_empty() {
                    entry.name.clone()
                } else {
                    format!("{base}/{}", entry.name)
                };
                match entry.kind {
                    EntryKind::Blob => {
                        out.insert(path, entry.oid);
                    }
                    EntryKind::Tree => {
                        stack.push((entry.oid, path));
                    }
                }
            }
        }

        Ok(out)
    }

    /// Empty the working tree, then materialize every path in `flatten(oid)`.
    pub fn restore(&self, oid: &ObjectId) -> Result<(), RepoError> {
        self.empty_working_tree()?;
        for (path, blob_oid) in self.flatten(oid)? {
            let full = self.worktree.join(&path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent)?;
            }
            let bytes = self.odb.get(&blob_oid, Some(ObjectType::Blob))?;
            fs::write(&full, bytes)?;
        }
        Ok(())
    }
}
