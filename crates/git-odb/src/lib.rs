//! Flat, content-addressed object database.
//!
//! Every object lives at `objects/<oid>` as raw `type\0payload` bytes: no
//! fan-out subdirectories, no compression, no packs, no alternates. Writes
//! go through a temp-file-then-rename so a reader never observes a partial
//! object, and writing an object that already exists is a no-op.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use git_hash::ObjectId;
use git_object::cache::ObjectCache;
use git_object::{Object, ObjectType};
use git_utils::tempfile::TempFile;

pub use error::OdbError;

mod error {
    use git_hash::ObjectId;
    use git_object::ObjectType;

    #[derive(Debug, thiserror::Error)]
    pub enum OdbError {
        #[error("object not found: {0}")]
        NotFound(ObjectId),

        #[error("object {oid} is a {actual}, expected {expected}")]
        TypeMismatch {
            oid: ObjectId,
            expected: ObjectType,
            actual: ObjectType,
        },

        #[error("corrupt object {oid}: {reason}")]
        Corrupt { oid: ObjectId, reason: String },

        #[error(transparent)]
        Object(#[from] git_object::ObjectError),

        #[error(transparent)]
        Hash(#[from] git_hash::HashError),

        #[error(transparent)]
        Io(#[from] std::io::Error),

        #[error(transparent)]
        Util(#[from] git_utils::UtilError),
    }
}

/// Content-addressed store for blob, tree, and commit objects.
pub struct ObjectDatabase {
    objects_dir: PathBuf,
    cache: Mutex<ObjectCache>,
}

impl ObjectDatabase {
    /// Open (and create, if missing) the object store rooted at `objects_dir`.
    pub fn open(objects_dir: impl AsRef<Path>) -> Result<Self, OdbError> {
        let objects_dir = objects_dir.as_ref().to_path_buf();
        fs::create_dir_all(&objects_dir)?;
        Ok(Self {
            objects_dir,
            cache: Mutex::new(ObjectCache::new(1024)),
        })
    }

    fn object_path(&self, oid: &ObjectId) -> PathBuf {
        self.objects_dir.join(oid.to_hex())
    }

    /// Store raw payload bytes under the given type, returning its oid.
    ///
    /// Idempotent: if the object is already present, no write occurs.
    pub fn put(&self, payload: &[u8], obj_type: ObjectType) -> Result<ObjectId, OdbError> {
        let oid = git_hash::hasher::Hasher::hash_object(obj_type.to_string().as_str(), payload);
        let path = self.object_path(&oid);
        if path.is_file() {
            return Ok(oid);
        }

        let mut tmp = TempFile::new_for(&path)?;
        tmp.write_all(obj_type.as_bytes())?;
        tmp.write_all(&[0u8])?;
        tmp.write_all(payload)?;
        tmp.flush()?;
        tmp.persist(&path)?;
        Ok(oid)
    }

    /// Store a fully-typed object, returning its oid.
    pub fn write(&self, obj: &Object) -> Result<ObjectId, OdbError> {
        self.put(&obj.serialize_content(), obj.object_type())
    }

    /// Fetch the raw stored bytes (header + payload) for `oid`.
    ///
    /// If `expected` is given and the stored type differs, fails with
    /// [`OdbError::TypeMismatch`] rather than returning the bytes.
    pub fn get(&self, oid: &ObjectId, expected: Option<ObjectType>) -> Result<Vec<u8>, OdbError> {
        let path = self.object_path(oid);
        let data = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OdbError::NotFound(*oid)
            } else {
                OdbError::Io(e)
            }
        })?;

        let (actual, header_len) =
            git_object::header::parse_header(&data).map_err(|e| OdbError::Corrupt {
                oid: *oid,
                reason: e.to_string(),
            })?;

        if let Some(expected) = expected {
            if actual != expected {
                return Err(OdbError::TypeMismatch {
                    oid: *oid,
                    expected,
                    actual,
                });
            }
        }

        Ok(data[header_len..].to_vec())
    }

    /// Read and fully parse the object at `oid`.
    pub fn read(&self, oid: &ObjectId) -> Result<Object, OdbError> {
        let path = self.object_path(oid);
        let data = fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OdbError::NotFound(*oid)
            } else {
                OdbError::Io(e)
            }
        })?;
        Ok(Object::parse(&data)?)
    }

    /// Read an object, consulting (and populating) the in-memory LRU cache.
    pub fn read_cached(&self, oid: &ObjectId) -> Result<Object, OdbError> {
        {
            let mut cache = self.cache.lock().unwrap();
            if let Some(obj) = cache.get(oid) {
                return Ok(obj.clone());
            }
        }

        let obj = self.read(oid)?;
        let mut cache = self.cache.lock().unwrap();
        cache.insert(*oid, obj.clone());
        Ok(obj)
    }

    /// Whether an object with this oid is present.
    pub fn exists(&self, oid: &ObjectId) -> bool {
        self.object_path(oid).is_file()
    }

    /// Path to the objects directory backing this store.
    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Iterate over every oid currently stored (for replication and fsck-style walks).
    pub fn iter_oids(&self) -> Result<impl Iterator<Item = ObjectId>, OdbError> {
        let mut oids = Vec::new();
        for entry in fs::read_dir(&self.objects_dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if let Ok(oid) = ObjectId::from_hex(name) {
                    oids.push(oid);
                }
            }
        }
        Ok(oids.into_iter())
    }
}
