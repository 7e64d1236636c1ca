//! Checkout results
//!
//! Commit records keep only paths and content hashes, never file contents,
//! so a checkout cannot rewrite the working tree. Instead it reports, per
//! file of the target snapshot, how the working copy relates to it.

pub mod restoration;
