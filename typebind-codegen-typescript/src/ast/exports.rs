//! TypeScript re-export builder.

use typebind_codegen::builder::CodeBuilder;

/// Builder for TypeScript re-export statements.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
    namespace: Option<String>,
}

impl Export {
    /// Re-export from another module.
    #[allow(clippy::should_implement_trait)]
    pub fn from(module: impl Into<String>) -> Self {
        Self {
            from: module.into(),
            named: Vec::new(),
            namespace: None,
        }
    }

    /// Re-export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Re-export the whole module under a namespace (`export * as ns`).
    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }

    /// Render the export to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let export_str = match (&self.namespace, self.named.is_empty()) {
            (Some(ns), _) => format!("export * as {} from \"{}\";", ns, self.from),
            (None, true) => format!("export * from \"{}\";", self.from),
            (None, false) => format!(
                "export {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            ),
        };

        builder.line(&export_str)
    }

    /// Build the export as a string.
    pub fn build(&self) -> String {
        self.render(CodeBuilder::typescript()).build()
    }
}
