//! Manifest types and parsing for typebind.toml files.

mod file;
mod options;
mod parse;

use std::path::PathBuf;

pub use file::ManifestFile;
pub use options::{Language, OutputType, Overwrite};
use serde::Deserialize;
use typebind_ir::HostPlatform;

/// Root manifest for typebind.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub generator: GeneratorConfig,

    /// Host type system facts, Java when absent
    #[serde(default)]
    pub platform: HostPlatform,

    pub registry: RegistryConfig,
}

/// The `[generator]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub language: Language,

    /// Host packages to generate bindings for
    pub packages: Vec<String>,

    /// Output root; files are only previewed when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub overwrite: Overwrite,

    #[serde(default)]
    pub output_type: OutputType,

    /// Package prefix removed when mapping packages to directories
    #[serde(default = "default_strip_prefix")]
    pub strip_prefix: String,

    /// A type is generated when it carries any of these markers
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

/// The `[registry]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Type registry files, relative to the manifest
    pub sources: Vec<PathBuf>,
}

fn default_strip_prefix() -> String {
    "com.vmware.".to_string()
}

fn default_markers() -> Vec<String> {
    ["XmlType", "XmlEnum", "Supported"]
        .into_iter()
        .map(String::from)
        .collect()
}
