//! Staged changes against HEAD
//!
//! Only content hashes are compared. Line-level diffs would need the file
//! contents of both sides, which commit records do not keep.

pub mod diff_entry;
