//! Per-run record of emitted types.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

use typebind_ir::QualifiedName;

use crate::{Error, Result};

/// Types emitted so far in one run, and the module file each went to.
///
/// Overlapping package scopes can reach the same type twice; only the first
/// emission counts. Two different types may never share a module file.
/// Barrel rendering reads the module-to-symbol map back.
#[derive(Debug, Clone, Default)]
pub struct EmissionCache {
    emitted: HashSet<QualifiedName>,
    modules: HashMap<PathBuf, (QualifiedName, String)>,
}

impl EmissionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `name` is emitted into `module` under `symbol`.
    ///
    /// Returns `false` if the type was already emitted, and
    /// [`Error::ModuleCollision`] if another type already owns the module.
    pub fn record(
        &mut self,
        name: &QualifiedName,
        module: &Path,
        symbol: &str,
    ) -> Result<bool> {
        if self.emitted.contains(name) {
            return Ok(false);
        }
        if let Some((owner, _)) = self.modules.get(module) {
            return Err(Error::ModuleCollision {
                module: module.to_path_buf(),
                first: owner.to_string(),
                second: name.to_string(),
            });
        }
        self.emitted.insert(name.clone());
        self.modules
            .insert(module.to_path_buf(), (name.clone(), symbol.to_string()));
        Ok(true)
    }

    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.emitted.contains(name)
    }

    /// Type emitted into an output-relative module file.
    pub fn symbol_for(&self, module: &Path) -> Option<&str> {
        self.modules.get(module).map(|(_, symbol)| symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }
}
