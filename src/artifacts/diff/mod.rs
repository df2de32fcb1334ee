//! The diff engine
//!
//! - `lcs_matrix`: suffix-LCS dynamic program over normalized lines
//! - `chunk`: matrix walk partitioning both files into edit chunks
//! - `diff_source`: one side of a comparison (raw + normalized lines)
//!
//! Alignment runs on normalized lines; chunk positions and rendered bodies
//! always refer to the original lines.

pub mod chunk;
pub mod diff_source;
pub mod lcs_matrix;
