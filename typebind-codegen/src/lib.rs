//! Shared code generation for typebind targets.
//!
//! This crate turns host types into target-neutral descriptors and drives a
//! [`LanguageCodegen`] implementation over a set of packages. Target crates
//! (`typebind-codegen-typescript`, `typebind-codegen-python`) only supply a
//! type mapper, naming rules and renderers.
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text building (CodeBuilder, Indent)
//! - [`Layout`] / [`ImportResolver`] - Package to directory and import path rules
//! - [`Extractor`] - Host type to descriptor conversion
//! - [`Generator`] - Per-run orchestration, output policy and barrels
//! - [`testing`] - Test utilities (feature-gated)
#![allow(unused_assignments)]

pub mod builder;

mod barrels;
mod cache;
mod error;
mod extract;
mod generator;
mod imports;
mod language;
mod layout;
mod output;
mod source;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use barrels::{BarrelPlanner, plan_barrels, scan_barrels};
pub use cache::EmissionCache;
pub use error::{Error, Result};
pub use extract::Extractor;
pub use generator::{GenerateResult, Generator, Preview, PreviewFile};
pub use imports::{ImportResolver, ImportStyle};
pub use language::{LanguageCodegen, NamingConvention, RESERVED_FIELD_NAMES, RenderContext, TypeMapper};
pub use layout::Layout;
pub use output::prepare_output;
pub use source::TypeSource;
