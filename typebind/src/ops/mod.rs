//! Core operations.
//!
//! This module contains the business logic for typebind commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod describe;
pub mod generate;

pub use check::check;
pub use describe::describe;
pub use generate::{GenerateOptions, generate};
