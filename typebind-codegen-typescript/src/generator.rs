//! TypeScript target.

use typebind_codegen::{
    ImportStyle, LanguageCodegen, NamingConvention, RenderContext, TypeMapper,
};
use typebind_ir::{BarrelDescriptor, ClassDescriptor, EnumDescriptor};

use crate::{
    TS_NAMING, TypeScriptTypeMapper,
    files::{ClassTs, EnumTs, IndexTs},
};

/// TypeScript bindings: one `.ts` module per type, `index.ts` barrels and
/// `./`-relative imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptCodegen;

impl TypeScriptCodegen {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodegen for TypeScriptCodegen {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn barrel_file(&self) -> &'static str {
        "index.ts"
    }

    fn import_style(&self) -> ImportStyle {
        ImportStyle::SlashPath
    }

    fn naming(&self) -> &NamingConvention {
        &TS_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &TypeScriptTypeMapper
    }

    fn render_class(&self, class: &ClassDescriptor, ctx: &RenderContext) -> String {
        ClassTs::new(class, ctx).render()
    }

    fn render_enum(&self, enumeration: &EnumDescriptor, ctx: &RenderContext) -> String {
        EnumTs::new(enumeration, ctx).render()
    }

    fn render_barrel(&self, barrel: &BarrelDescriptor, ctx: &RenderContext) -> String {
        IndexTs::new(barrel, ctx).render()
    }
}
