use std::io::{self, Write};

use sha1::{Digest, Sha1};

use crate::ObjectId;

/// Incremental SHA-1 hasher over arbitrary byte streams.
///
/// Used both to hash a single in-memory payload (via [`Hasher::digest`]) and
/// to hash streamed object content without buffering it twice.
pub struct Hasher(Sha1);

impl Hasher {
    pub fn new() -> Self {
        Self(Sha1::new())
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> ObjectId {
        let digest = self.0.finalize();
        ObjectId::from_bytes(&digest).expect("sha1 digest is always 20 bytes")
    }

    /// Hash `data` in one call.
    pub fn digest(data: &[u8]) -> ObjectId {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Hash an object's header-tagged form: `type` + NUL + `payload`.
    ///
    /// This is the oid of every stored object; the header carries no length
    /// field, so hashing must match the on-disk framing exactly.
    pub fn hash_object(object_type: &str, payload: &[u8]) -> ObjectId {
        let mut hasher = Self::new();
        hasher.update(object_type.as_bytes());
        hasher.update(&[0u8]);
        hasher.update(payload);
        hasher.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
