//! Build-noise normalization
//!
//! Strips the content that varies between two builds of the same artifact
//! (timestamps, path prefixes, name/version tokens) so the diff engine
//! aligns what is semantically the same.

pub mod normalizer;

/// Embedded build timestamps in the form `DD-MM-YYYY HH:MM:SS`.
pub const DATETIME_PATTERN: &str = r"\d{2}-\d{2}-\d{4} \d{2}:\d{2}:\d{2}";
