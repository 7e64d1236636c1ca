//! Command implementations
//!
//! Each user-facing operation is an `impl Repository` block in its own file
//! under `porcelain`. Commands persist their state changes before returning
//! and write their human-readable output through the repository writer.

pub mod porcelain;
