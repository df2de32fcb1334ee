//! Comparison data structures and algorithms
//!
//! This module contains the core types and the diff engine:
//!
//! - `core`: shared error taxonomy
//! - `identity`: name/version extraction from artifact file names
//! - `normalize`: build-noise stripping (timestamps, paths, identity tokens)
//! - `diff`: suffix-LCS matrix and chunk extraction

pub mod core;
pub mod diff;
pub mod identity;
pub mod normalize;
