//! Input side of typebind: the `typebind.toml` manifest and the type
//! registry files describing the host schema.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod registry;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    GeneratorConfig, Language, Manifest, ManifestFile, OutputType, Overwrite, RegistryConfig,
};
pub use registry::{Registry, TypeExprError, parse_type_expr};
