//! Merge support
//!
//! Merging is fast-forward only: the current branch is moved to the other
//! branch's tip. Histories are never combined, so no merge commit exists and
//! no conflict is ever detected.
//!
//! - `merge_outcome`: what a merge did to HEAD
//! - `conflict`: conflict-marker rendering for manual resolution

pub mod conflict;
pub mod merge_outcome;
