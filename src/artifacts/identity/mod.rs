//! File identity extraction
//!
//! An artifact's base name carries the identity pair driving normalization:
//! the stem names the artifact, the optional dotted numeric segment names
//! its version.

pub mod file_identity;

/// Base name shape: a stem of letters, digits, `_` and `-` (shortest match,
/// so a trailing dotted version is not swallowed into the stem), an optional
/// dotted numeric version, and an extension.
pub const NAME_PATTERN: &str = r"^([a-zA-Z0-9_-]+?)(?:[^a-zA-Z0-9]*([\d.]+))?\.(\w+)$";
