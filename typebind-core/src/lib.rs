//! Core utilities and types for typebind.
//!
//! This crate provides the file-writing primitives and identifier casing
//! shared by every target.

mod file;
mod utils;

// File operations
pub use file::{GeneratedFile, write_file};
// String utilities
pub use utils::{module_name, to_snake_case};
