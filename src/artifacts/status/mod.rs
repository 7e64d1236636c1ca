//! Working tree status
//!
//! ## Components
//!
//! - `file_change`: change categories for staged and working-tree files
//! - `status_report`: the aggregated result of `status`

pub mod file_change;
pub mod status_report;
