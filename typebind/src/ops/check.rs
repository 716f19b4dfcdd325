//! Check operation - manifest and registry validation.

use eyre::Result;
use typebind_codegen::{Layout, TypeSource};
use typebind_schema::{ManifestFile, Registry};

use crate::{
    language,
    reports::{CheckReport, PackageSummary},
};

/// Execute the check operation.
///
/// Both inputs have already been parsed by the time this runs; what is left
/// is reporting where each package lands and what it would emit.
pub fn check(file: &ManifestFile, registry: &Registry) -> Result<CheckReport> {
    let config = &file.manifest().generator;
    let target = language::target(config.language);
    let layout = Layout::new(config.strip_prefix.clone());

    let packages = config
        .packages
        .iter()
        .map(|package| PackageSummary {
            name: package.clone(),
            directory: layout.dirs(package, target.naming()).join("/"),
            candidates: registry
                .find_candidate_types(package, &config.markers)
                .len(),
        })
        .collect();

    Ok(CheckReport {
        config_path: file.path().to_path_buf(),
        language: config.language.to_string(),
        registry_types: registry.len(),
        packages,
    })
}
