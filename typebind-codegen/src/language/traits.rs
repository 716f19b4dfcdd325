//! Language-agnostic code generation traits.

use typebind_ir::{BarrelDescriptor, ClassDescriptor, EnumDescriptor, QualifiedName};
use typebind_schema::OutputType;

use super::NamingConvention;
use crate::ImportStyle;

/// Trait for language-specific code generators.
///
/// Renderers are pure: a descriptor and a render context in, file text out.
/// Everything else (discovery, imports, layout, writing) is shared.
pub trait LanguageCodegen {
    /// Language identifier (e.g. "typescript", "python")
    fn language(&self) -> &'static str;

    /// File extension for generated modules, without the dot
    fn file_extension(&self) -> &'static str;

    /// File name of the per-directory barrel, e.g. `index.ts`
    fn barrel_file(&self) -> &'static str;

    fn import_style(&self) -> ImportStyle;

    fn naming(&self) -> &NamingConvention;

    fn type_mapper(&self) -> &dyn TypeMapper;

    fn render_class(&self, class: &ClassDescriptor, ctx: &RenderContext) -> String;

    fn render_enum(&self, enumeration: &EnumDescriptor, ctx: &RenderContext) -> String;

    fn render_barrel(&self, barrel: &BarrelDescriptor, ctx: &RenderContext) -> String;
}

/// Values shared by every file rendered in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Year stamped into file headers
    pub year: i32,
    pub output_type: OutputType,
}

impl RenderContext {
    pub fn new(year: i32, output_type: OutputType) -> Self {
        Self { year, output_type }
    }

    /// Context for the current local year.
    pub fn current(output_type: OutputType) -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year(), output_type)
    }
}

/// Trait for mapping host leaf types to target-language type spellings.
///
/// Only fully unwrapped leaf types reach the mapper; arrays, collections and
/// generic arguments are handled by the extractor.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Fixed spelling of a built-in type, `None` for everything else.
    fn builtin(&self, ty: &QualifiedName) -> Option<&'static str>;

    /// Whether the type needs no import.
    fn is_builtin(&self, ty: &QualifiedName) -> bool {
        self.builtin(ty).is_some()
    }

    /// Target spelling of a leaf type: the built-in spelling or the simple name.
    fn name_for(&self, ty: &QualifiedName) -> String {
        match self.builtin(ty) {
            Some(name) => name.to_string(),
            None => ty.name().to_string(),
        }
    }

    /// Spelling of an ordered collection of `element`.
    fn repeated(&self, element: &str) -> String {
        format!("{}[]", element)
    }
}
