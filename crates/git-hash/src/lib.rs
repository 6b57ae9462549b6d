//! Object identifiers for ugit: SHA-1 hashing and hex codec.
//!
//! ugit hashes the header-tagged byte form of an object (`type || 0x00 ||
//! payload`), never the raw payload alone, so a blob and a tree holding the
//! same bytes never collide.

mod error;
pub mod hasher;
pub mod hex;
mod oid;

pub use error::HashError;
pub use oid::ObjectId;

/// Length of a SHA-1 digest, in bytes.
pub const OID_BYTE_LEN: usize = 20;
/// Length of a SHA-1 object id, in hex characters.
pub const OID_HEX_LEN: usize = 40;
