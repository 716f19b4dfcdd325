//! Python `from ... import ...` statements.

use std::collections::{BTreeMap, BTreeSet};

use typebind_codegen::builder::CodeBuilder;
use typebind_ir::ImportDescriptor;

/// A single `from module import a, b` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromImport {
    module: String,
    names: Vec<String>,
}

impl FromImport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let names = if self.names.is_empty() {
            "*".to_string()
        } else {
            self.names.join(", ")
        };
        builder.line(&format!("from {} import {}", self.module, names))
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::python()).build()
    }
}

/// Imports of one module, grouped the way isort lays them out: standard
/// library first, then relative imports, a blank line between groups.
#[derive(Debug, Clone, Default)]
pub struct ImportBlock {
    stdlib: BTreeMap<&'static str, BTreeSet<&'static str>>,
    local: Vec<FromImport>,
}

impl ImportBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name from a standard library module.
    pub fn std(&mut self, module: &'static str, name: &'static str) -> &mut Self {
        self.stdlib.entry(module).or_default().insert(name);
        self
    }

    /// Add a relative import of a generated type.
    pub fn local(&mut self, import: &ImportDescriptor) -> &mut Self {
        self.local
            .push(FromImport::new(&import.module_path).name(&import.exported_symbol));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stdlib.is_empty() && self.local.is_empty()
    }

    /// Render both groups. Renders nothing when empty.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let stdlib = self.stdlib.iter().map(|(module, names)| {
            names
                .iter()
                .fold(FromImport::new(*module), |import, name| import.name(*name))
        });

        builder
            .each(stdlib, |b, import| import.render(b))
            .when(!self.stdlib.is_empty() && !self.local.is_empty(), |b| {
                b.blank()
            })
            .each(&self.local, |b, import| import.render(b))
    }
}
