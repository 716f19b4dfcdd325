//! Class and interface modules.

use typebind_codegen::{RenderContext, builder::CodeBuilder};
use typebind_ir::{ClassDescriptor, FieldDescriptor};
use typebind_schema::OutputType;

use super::header;
use crate::ast::Import;

/// A module holding one generated class or interface.
pub struct ClassTs<'a> {
    class: &'a ClassDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> ClassTs<'a> {
    pub fn new(class: &'a ClassDescriptor, ctx: &'a RenderContext) -> Self {
        Self { class, ctx }
    }

    fn declaration(&self) -> String {
        let keyword = match self.ctx.output_type {
            OutputType::Interface => "interface",
            OutputType::Class if self.class.is_abstract => "abstract class",
            OutputType::Class => "class",
        };
        match &self.class.parent_name {
            Some(parent) => format!("export {} {} extends {} {{", keyword, self.class.name, parent),
            None => format!("export {} {} {{", keyword, self.class.name),
        }
    }

    fn field(builder: CodeBuilder, field: &FieldDescriptor) -> CodeBuilder {
        builder
            .when(field.is_remapped(), |b| {
                b.line(&format!("/** Serialized as `{}`. */", field.wire_name))
            })
            .line(&format!("{}?: {};", field.display_name, field.type_name))
    }

    pub fn render(&self) -> String {
        let type_only = self.ctx.output_type == OutputType::Interface;

        header(self.ctx.year)
            .each(&self.class.imports, |b, import| {
                let import = Import::from(import);
                let import = if type_only { import.type_only() } else { import };
                import.render(b)
            })
            .when(!self.class.imports.is_empty(), |b| b.blank())
            .block_with_close(&self.declaration(), "}", |b| {
                b.each(&self.class.fields, |b, field| Self::field(b, field))
            })
            .build()
    }
}
