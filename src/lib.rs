//! logdiff: line-oriented comparison of generated build artifacts
//!
//! Two artifacts produced by the same build at different times or in
//! different directories differ in timestamps, path prefixes, and
//! name/version tokens even when they are semantically identical. This
//! crate strips that noise before aligning the files line by line and
//! reports the remaining differences in classic diff notation.
//!
//! - `areas`: boundary components (file intake, the comparison coordinator)
//! - `artifacts`: data structures and algorithms (identity, normalization,
//!   the LCS diff engine)
//! - `commands`: user-facing operations implemented on the coordinator

pub mod areas;
pub mod artifacts;
pub mod commands;
