//! Boundary components of a comparison run
//!
//! This module contains the pieces that face the outside world:
//!
//! - `comparison`: high-level coordinator owning the output writer
//! - `workspace`: file intake and error translation

pub mod comparison;
pub(crate) mod workspace;
