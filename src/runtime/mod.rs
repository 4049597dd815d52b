//! # Runtime Module
//!
//! Process-level setup shared by the `inflate` and `validate` binaries.

pub mod initialization;

pub use initialization::*;
