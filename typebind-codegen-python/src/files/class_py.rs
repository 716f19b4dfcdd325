//! Class modules.

use typebind_codegen::{RenderContext, builder::CodeBuilder};
use typebind_ir::{ClassDescriptor, FieldDescriptor};

use super::header;
use crate::ast::ImportBlock;

/// A module holding one generated class.
///
/// Python has no interface form, so the output type is ignored. Attribute
/// names go through `_attribute_map` to reach their wire names; a subclass
/// map extends its parent's.
pub struct ClassPy<'a> {
    class: &'a ClassDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> ClassPy<'a> {
    pub fn new(class: &'a ClassDescriptor, ctx: &'a RenderContext) -> Self {
        Self { class, ctx }
    }

    fn imports(&self) -> ImportBlock {
        let mut block = ImportBlock::new();
        if self.class.is_abstract {
            block.std("abc", "ABC");
        }
        if self.class.fields.iter().any(|f| mentions(f, "datetime")) {
            block.std("datetime", "datetime");
        }
        if !self.class.fields.is_empty() {
            block.std("typing", "Optional");
        }
        if self.class.fields.iter().any(|f| f.is_repeated) {
            block.std("typing", "List");
        }
        for import in &self.class.imports {
            block.local(import);
        }
        block
    }

    fn declaration(&self) -> String {
        let mut bases: Vec<&str> = self.class.parent_name.iter().map(String::as_str).collect();
        if self.class.is_abstract {
            bases.push("ABC");
        }
        if bases.is_empty() {
            format!("class {}:", self.class.name)
        } else {
            format!("class {}({}):", self.class.name, bases.join(", "))
        }
    }

    fn attribute_map(&self, builder: CodeBuilder) -> CodeBuilder {
        if self.class.fields.is_empty() && self.class.parent_name.is_none() {
            return builder.line("_attribute_map = {}");
        }
        builder.block_with_close("_attribute_map = {", "}", |b| {
            b.each(self.class.parent_name.as_deref(), |b, parent| {
                b.line(&format!("**{}._attribute_map,", parent))
            })
            .each(&self.class.fields, |b, field| {
                b.line(&format!(
                    "\"{}\": \"{}\",",
                    field.display_name, field.wire_name
                ))
            })
        })
    }

    fn constructor(&self, builder: CodeBuilder) -> CodeBuilder {
        let has_parent = self.class.parent_name.is_some();
        builder.block("def __init__(self, **kwargs):", |b| {
            b.when(has_parent, |b| b.line("super().__init__(**kwargs)"))
                .when(!has_parent && self.class.fields.is_empty(), |b| b.line("pass"))
                .each(&self.class.fields, |b, field| {
                    b.line(&format!(
                        "self.{name}: Optional[{ty}] = kwargs.get(\"{name}\")",
                        name = field.display_name,
                        ty = field.type_name
                    ))
                })
        })
    }

    pub fn render(&self) -> String {
        let imports = self.imports();

        header(self.ctx.year)
            .when(!imports.is_empty(), |b| imports.render(b).blank().blank())
            .block(&self.declaration(), |b| {
                let b = self.attribute_map(b).blank();
                self.constructor(b)
            })
            .build()
    }
}

/// Whether a field's type spelling uses `word` as a whole identifier.
fn mentions(field: &FieldDescriptor, word: &str) -> bool {
    field
        .type_name
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .any(|token| token == word)
}
