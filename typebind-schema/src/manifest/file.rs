use std::path::{Path, PathBuf};

use super::Manifest;
use crate::{Error, Registry, Result};

/// A typebind.toml file together with its location.
///
/// Relative paths inside the manifest resolve against the manifest's
/// directory, not the working directory.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a typebind.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }

    /// Directory holding the manifest.
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    /// Resolve a manifest-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    /// Registry source files, resolved.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.manifest
            .registry
            .sources
            .iter()
            .map(|p| self.resolve(p))
            .collect()
    }

    /// Configured output directory, resolved.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.manifest
            .generator
            .output_dir
            .as_deref()
            .map(|p| self.resolve(p))
    }

    /// Load every registry source listed in the manifest.
    pub fn load_registry(&self) -> Result<Registry> {
        Registry::load(&self.source_paths())
    }
}
