//! Commit records and their identifiers
//!
//! Only commits are stored as objects. Files are referenced by path and
//! content hash, never stored as content themselves.
//!
//! - `hasher`: content hashing (SHA-1 rendered as hex)
//! - `object_id`: validated 40-character identifiers
//! - `commit`: the immutable commit record and its text format

pub mod commit;
pub mod hasher;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving abbreviated commit ids
pub const MIN_PREFIX_LENGTH: usize = 4;

/// Length of the abbreviated form shown to users
pub const SHORT_OID_LENGTH: usize = 7;
