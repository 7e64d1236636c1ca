//! Data structures used by the commands
//!
//! - `branch`: branch names and naming rules
//! - `checkout`: per-file checkout report
//! - `core`: pager wrapper for long output
//! - `diff`: staged entries compared with HEAD
//! - `log`: lazy history traversal
//! - `merge`: merge outcomes and conflict markers
//! - `objects`: content hashing, object ids and commit records
//! - `staging`: staged file entries
//! - `status`: status categories and report

pub mod branch;
pub mod checkout;
pub mod core;
pub mod diff;
pub mod log;
pub mod merge;
pub mod objects;
pub mod staging;
pub mod status;
