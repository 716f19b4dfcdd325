//! Relative module paths between generated files.

use std::{collections::HashMap, iter};

use typebind_core::to_snake_case;
use typebind_ir::{HostPlatform, QualifiedName};

use crate::{Error, Layout, NamingConvention, Result, TypeMapper};

/// How a target spells the path of an imported module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStyle {
    /// `./sibling`, `../up/Other` (TypeScript, JavaScript)
    SlashPath,
    /// `.sibling`, `..up.other` (Python relative imports)
    DottedRelative,
}

impl ImportStyle {
    /// Join a relative location into this style's module path.
    ///
    /// `ups` is the number of directories ascended from the importing
    /// module's directory, `down` the directories descended afterwards and
    /// `module` the imported file name without extension.
    pub fn format(&self, ups: usize, down: &[String], module: &str) -> String {
        match self {
            ImportStyle::SlashPath => {
                let prefix = if ups == 0 {
                    "./".to_string()
                } else {
                    "../".repeat(ups)
                };
                let rest: Vec<&str> = down
                    .iter()
                    .map(String::as_str)
                    .chain(iter::once(module))
                    .collect();
                format!("{}{}", prefix, rest.join("/"))
            }
            ImportStyle::DottedRelative => {
                // One dot is the current package, each extra dot one level up.
                let rest: Vec<String> = down
                    .iter()
                    .map(String::as_str)
                    .chain(iter::once(module))
                    .map(to_snake_case)
                    .collect();
                format!("{}{}", ".".repeat(ups + 1), rest.join("."))
            }
        }
    }
}

/// Computes and memoizes import paths for one target.
///
/// Both locations go through the [`Layout`] first, so paths match the tree
/// the generator writes.
pub struct ImportResolver<'a> {
    style: ImportStyle,
    layout: &'a Layout,
    naming: &'a NamingConvention,
    mapper: &'a dyn TypeMapper,
    host: &'a HostPlatform,
    memo: HashMap<(QualifiedName, QualifiedName), Option<String>>,
}

impl<'a> ImportResolver<'a> {
    pub fn new(
        style: ImportStyle,
        layout: &'a Layout,
        naming: &'a NamingConvention,
        mapper: &'a dyn TypeMapper,
        host: &'a HostPlatform,
    ) -> Self {
        Self {
            style,
            layout,
            naming,
            mapper,
            host,
            memo: HashMap::new(),
        }
    }

    /// Module path `referencing` must use to import `referenced`.
    ///
    /// Returns `Ok(None)` when no import is needed: the type refers to
    /// itself, or the referenced type is built-in or part of the host
    /// platform library.
    pub fn resolve(
        &mut self,
        referencing: &QualifiedName,
        referenced: &QualifiedName,
    ) -> Result<Option<String>> {
        if referencing == referenced
            || self.mapper.is_builtin(referenced)
            || self.host.is_library(referenced)
        {
            return Ok(None);
        }
        if !referenced.has_package() {
            return Err(Error::UnresolvedReference {
                referencing: referencing.to_string(),
                referenced: referenced.to_string(),
            });
        }

        let key = (referencing.clone(), referenced.clone());
        if let Some(path) = self.memo.get(&key) {
            return Ok(path.clone());
        }

        let path = Some(self.module_path(referencing.package(), referenced));
        self.memo.insert(key, path.clone());
        Ok(path)
    }

    fn module_path(&self, from_package: &str, referenced: &QualifiedName) -> String {
        let from = self.layout.dirs(from_package, self.naming);
        let to = self.layout.dirs(referenced.package(), self.naming);
        let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

        let module = self.naming.file_name(referenced.name());
        self.style.format(from.len() - common, &to[common..], &module)
    }

    /// Number of memoized pairs.
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
}
