//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `checkout`: Move HEAD to a commit
//! - `status`: Show staged and changed files
//! - `diff`: Show staged entries against HEAD
//! - `branch`: Create, list and switch branches
//! - `merge`: Fast-forward the current branch to another one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
pub mod status;
