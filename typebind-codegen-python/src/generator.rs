//! Python target.

use typebind_codegen::{
    ImportStyle, LanguageCodegen, NamingConvention, RenderContext, TypeMapper,
};
use typebind_ir::{BarrelDescriptor, ClassDescriptor, EnumDescriptor};

use crate::{
    PYTHON_NAMING, PythonTypeMapper,
    files::{ClassPy, EnumPy, InitPy},
};

/// Python bindings: one snake_case `.py` module per type, `__init__.py`
/// packages and dotted relative imports.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonCodegen;

impl PythonCodegen {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodegen for PythonCodegen {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn barrel_file(&self) -> &'static str {
        "__init__.py"
    }

    fn import_style(&self) -> ImportStyle {
        ImportStyle::DottedRelative
    }

    fn naming(&self) -> &NamingConvention {
        &PYTHON_NAMING
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &PythonTypeMapper
    }

    fn render_class(&self, class: &ClassDescriptor, ctx: &RenderContext) -> String {
        ClassPy::new(class, ctx).render()
    }

    fn render_enum(&self, enumeration: &EnumDescriptor, ctx: &RenderContext) -> String {
        EnumPy::new(enumeration, ctx).render()
    }

    fn render_barrel(&self, barrel: &BarrelDescriptor, ctx: &RenderContext) -> String {
        InitPy::new(barrel, ctx).render()
    }
}
