//! TypeScript import builder.

use typebind_codegen::builder::CodeBuilder;
use typebind_ir::ImportDescriptor;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// Render the import to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let type_kw = if self.type_only { "type " } else { "" };

        let import_str = if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        };

        builder.line(&import_str)
    }

    /// Build the import as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}

impl From<&ImportDescriptor> for Import {
    fn from(import: &ImportDescriptor) -> Self {
        Import::new(&import.module_path).named(&import.exported_symbol)
    }
}
