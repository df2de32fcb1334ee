//! User-facing operations implemented on the comparison coordinator
//!
//! - `compare`: the full read → normalize → align → render pipeline

pub mod compare;
