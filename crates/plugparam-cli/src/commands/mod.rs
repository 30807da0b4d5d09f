//! CLI command implementations.

pub mod check;
pub mod common;
pub mod convert;
pub mod list;
pub mod remap;
