//! Commit history traversal
//!
//! - `rev_list`: lazy walk from a commit back to the root, one record per step
//!
//! History is single-parent, so a walk is a plain linked-list traversal that
//! always terminates at the first commit without a parent.

pub mod rev_list;
