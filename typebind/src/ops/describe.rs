//! Describe operation - a single type's descriptor.

use eyre::{Context, Result, bail};
use typebind_codegen::{Generator, RenderContext};
use typebind_schema::{Language, ManifestFile, Registry};

use crate::language;

/// Extract the descriptor of `type_name` for `language` and return it as
/// pretty-printed JSON.
pub fn describe(
    file: &ManifestFile,
    registry: &Registry,
    language: Language,
    type_name: &str,
) -> Result<String> {
    let manifest = file.manifest();
    let target = language::target(language);
    let generator = Generator::from_config(
        target.as_ref(),
        registry,
        &manifest.platform,
        &manifest.generator,
        RenderContext::current(manifest.generator.output_type),
    );

    let Some(descriptor) = generator
        .describe(type_name)
        .wrap_err_with(|| format!("Failed to describe '{}'", type_name))?
    else {
        bail!("type '{}' not found in registry", type_name);
    };

    serde_json::to_string_pretty(&descriptor).wrap_err("Failed to serialize descriptor")
}
