//! Per-directory barrel (index) listings.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
};

use typebind_core::module_name;
use typebind_ir::{BarrelDescriptor, BarrelEntry};
use walkdir::WalkDir;

use crate::{EmissionCache, Error, Result};

/// Collects barrel entries directory by directory.
///
/// Every directory seen, the output root included, gets a listing of its
/// module files and child directories. The barrel file itself and files
/// with a different extension are never listed.
pub struct BarrelPlanner<'a> {
    barrel_file: &'a str,
    extension: &'a str,
    cache: &'a EmissionCache,
    dirs: BTreeMap<PathBuf, BTreeSet<BarrelEntry>>,
}

impl<'a> BarrelPlanner<'a> {
    pub fn new(barrel_file: &'a str, extension: &'a str, cache: &'a EmissionCache) -> Self {
        let mut dirs = BTreeMap::new();
        dirs.insert(PathBuf::new(), BTreeSet::new());
        Self {
            barrel_file,
            extension,
            cache,
            dirs,
        }
    }

    /// Add an output-relative directory and all of its ancestors.
    pub fn add_dir(&mut self, dir: &Path) {
        let mut current = dir.to_path_buf();
        while let Some(name) = current.file_name() {
            let name = name.to_string_lossy().into_owned();
            let parent = current
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            self.dirs.entry(current.clone()).or_default();
            self.dirs
                .entry(parent.clone())
                .or_default()
                .insert(BarrelEntry::SubModule { name });
            current = parent;
        }
    }

    /// Add an output-relative file.
    pub fn add_file(&mut self, file: &Path) {
        let Some(file_name) = file.file_name().map(|n| n.to_string_lossy()) else {
            return;
        };
        if file_name == self.barrel_file {
            return;
        }
        if file.extension().is_none_or(|ext| ext != self.extension) {
            return;
        }
        let Some(name) = module_name(&file_name) else {
            return;
        };

        let dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
        self.add_dir(&dir);
        let entry = BarrelEntry::Module {
            name: name.to_string(),
            symbol: self.cache.symbol_for(file).map(String::from),
        };
        self.dirs.entry(dir).or_default().insert(entry);
    }

    /// One descriptor per directory, ordered by path.
    pub fn finish(self) -> Vec<BarrelDescriptor> {
        self.dirs
            .into_iter()
            .map(|(dir, entries)| BarrelDescriptor {
                directory: slash_path(&dir),
                entries: entries.into_iter().collect(),
            })
            .collect()
    }
}

/// Barrels for a planned list of output-relative files.
pub fn plan_barrels<'p>(
    files: impl IntoIterator<Item = &'p Path>,
    barrel_file: &str,
    extension: &str,
    cache: &EmissionCache,
) -> Vec<BarrelDescriptor> {
    let mut planner = BarrelPlanner::new(barrel_file, extension, cache);
    for file in files {
        planner.add_file(file);
    }
    planner.finish()
}

/// Barrels for everything currently under `root`.
///
/// Picks up files kept from earlier runs as well as the ones just written.
pub fn scan_barrels(
    root: &Path,
    barrel_file: &str,
    extension: &str,
    cache: &EmissionCache,
) -> Result<Vec<BarrelDescriptor>> {
    let mut planner = BarrelPlanner::new(barrel_file, extension, cache);
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::io(path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if entry.file_type().is_dir() {
            planner.add_dir(relative);
        } else {
            planner.add_file(relative);
        }
    }
    Ok(planner.finish())
}

/// `/`-joined path, empty for the root.
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
