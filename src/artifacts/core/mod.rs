//! Shared building blocks
//!
//! - `error`: the fatal error taxonomy of a comparison run

pub mod error;
