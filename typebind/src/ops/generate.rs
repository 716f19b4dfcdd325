//! Generate operation.

use std::path::PathBuf;

use eyre::{Context, Result};
use tracing::info;
use typebind_codegen::{Generator, RenderContext};
use typebind_schema::{Language, ManifestFile, OutputType, Overwrite, Registry};

use crate::{
    language,
    reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult},
};

/// Run settings after command-line overrides were applied.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub language: Language,
    /// `None` previews in memory.
    pub output_dir: Option<PathBuf>,
    pub overwrite: Overwrite,
    pub output_type: OutputType,
}

impl GenerateOptions {
    /// Options as configured in the manifest.
    pub fn from_manifest(file: &ManifestFile) -> Self {
        let config = &file.manifest().generator;
        Self {
            language: config.language,
            output_dir: file.output_dir(),
            overwrite: config.overwrite,
            output_type: config.output_type,
        }
    }
}

/// Execute the generate operation.
pub fn generate(
    file: &ManifestFile,
    registry: &Registry,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let manifest = file.manifest();
    let target = language::target(options.language);
    let generator = Generator::from_config(
        target.as_ref(),
        registry,
        &manifest.platform,
        &manifest.generator,
        RenderContext::current(options.output_type),
    );

    let Some(output_dir) = &options.output_dir else {
        info!("no output directory, previewing");
        let preview = generator.preview().wrap_err("Failed to generate bindings")?;
        return Ok(GenerateReport {
            language: options.language,
            packages: preview.packages.into_iter().collect(),
            empty_packages: preview.empty_packages,
            result: GenerationResult::Preview(PreviewResult {
                files: preview.files,
            }),
        });
    };

    let result = generator
        .generate(output_dir, options.overwrite)
        .wrap_err("Failed to generate bindings")?;

    Ok(GenerateReport {
        language: options.language,
        packages: result.packages.into_iter().collect(),
        empty_packages: result.empty_packages,
        result: GenerationResult::Written(WrittenResult {
            output_dir: output_dir.clone(),
            files: result.files,
            barrels: result.barrels,
            elapsed: result.elapsed,
        }),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_project(temp: &TempDir, language: &str) -> ManifestFile {
        fs::write(
            temp.path().join("typebind.toml"),
            format!(
                r#"
[generator]
language = "{language}"
packages = ["com.vmware.vcloud.api", "com.vmware.vcloud.empty"]
output_dir = "generated"

[registry]
sources = ["types.toml"]
"#
            ),
        )
        .unwrap();
        fs::write(
            temp.path().join("types.toml"),
            r#"
[[types]]
name = "com.vmware.vcloud.api.LinkType"
markers = ["XmlType"]
fields = [
    { name = "href", type = "String" },
    { name = "rel", type = "RelationType" },
]

[[types]]
name = "com.vmware.vcloud.api.RelationType"
kind = "enum"
markers = ["XmlEnum"]
constants = ["UP", "DOWN"]
"#,
        )
        .unwrap();
        ManifestFile::open(temp.path().join("typebind.toml")).unwrap()
    }

    #[test]
    fn test_generate_writes_configured_output() {
        let temp = TempDir::new().unwrap();
        let file = write_project(&temp, "typescript");
        let registry = file.load_registry().unwrap();

        let report = generate(&file, &registry, &GenerateOptions::from_manifest(&file)).unwrap();

        assert_eq!(report.total_types(), 2);
        assert_eq!(report.empty_packages, vec!["com.vmware.vcloud.empty"]);
        let GenerationResult::Written(written) = &report.result else {
            panic!("expected files to be written");
        };
        assert_eq!(written.files.len(), 2);
        assert!(temp.path().join("generated/vcloud/api/LinkType.ts").exists());
        assert!(temp.path().join("generated/vcloud/api/index.ts").exists());
    }

    #[test]
    fn test_generate_previews_without_output_dir() {
        let temp = TempDir::new().unwrap();
        let file = write_project(&temp, "python");
        let registry = file.load_registry().unwrap();

        let mut options = GenerateOptions::from_manifest(&file);
        options.output_dir = None;
        let report = generate(&file, &registry, &options).unwrap();

        let GenerationResult::Preview(preview) = &report.result else {
            panic!("expected a preview");
        };
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"vcloud/api/link_type.py"));
        assert!(paths.contains(&"vcloud/api/__init__.py"));
        assert_eq!(report.packages[0], ("com.vmware.vcloud.api".to_string(), 2));
        assert!(!temp.path().join("generated").exists());
    }

    #[test]
    fn test_generate_respects_overwrite_none() {
        let temp = TempDir::new().unwrap();
        let file = write_project(&temp, "typescript");
        let registry = file.load_registry().unwrap();
        fs::create_dir_all(temp.path().join("generated")).unwrap();
        fs::write(temp.path().join("generated/keep.txt"), "").unwrap();

        let options = GenerateOptions::from_manifest(&file);
        assert!(generate(&file, &registry, &options).is_err());

        let options = GenerateOptions {
            overwrite: Overwrite::Merge,
            ..options
        };
        generate(&file, &registry, &options).unwrap();
        assert!(temp.path().join("generated/keep.txt").exists());
    }
}
