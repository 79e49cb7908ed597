//! Core definitions (error types and precondition helpers), relied upon by all chainfold-* crates.

pub mod error;
pub mod result;

pub use result::Result;
