//! Persistent parts of a repository
//!
//! - `database`: commit records keyed by hash
//! - `refs`: HEAD, the current branch and branch pointers
//! - `repository`: state machine tying the other areas together
//! - `staging`: the set of files queued for the next commit
//! - `workspace`: file-system and clock collaborators

pub mod database;
pub mod refs;
pub mod repository;
pub mod staging;
pub mod workspace;
