use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_to_string};
use crate::{HashError, OID_BYTE_LEN, OID_HEX_LEN};

/// A SHA-1 object id: the hash of an object's header-tagged byte form.
///
/// Equality is defined purely on the 20 raw digest bytes; the hex form in
/// [`ObjectId::to_hex`] is derived, never stored separately.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OID_BYTE_LEN]);

impl ObjectId {
    /// The null (all-zeros) oid, used as a sentinel for "absent".
    pub const NULL: Self = Self([0u8; OID_BYTE_LEN]);

    /// Build an id from exactly 20 raw digest bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        if bytes.len() != OID_BYTE_LEN {
            return Err(HashError::InvalidHashLength {
                expected: OID_BYTE_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; OID_BYTE_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Parse a 40-character lowercase-or-mixed-case hex string.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        if hex.len() != OID_HEX_LEN {
            return Err(HashError::InvalidHexLength {
                expected: OID_HEX_LEN,
                actual: hex.len(),
            });
        }
        let mut bytes = [0u8; OID_BYTE_LEN];
        hex_decode(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Whether `s` has the right shape (40 hex chars) to be an oid, without
    /// claiming it names an object that actually exists.
    pub fn looks_like_oid(s: &str) -> bool {
        s.len() == OID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex_to_string(&self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
