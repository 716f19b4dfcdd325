//! Unified language dispatch.

use typebind_codegen::LanguageCodegen;
use typebind_codegen_python::PythonCodegen;
use typebind_codegen_typescript::TypeScriptCodegen;
use typebind_schema::Language;

/// The code generation target for a language.
pub fn target(language: Language) -> Box<dyn LanguageCodegen> {
    match language {
        Language::TypeScript => Box::new(TypeScriptCodegen::new()),
        Language::Python => Box::new(PythonCodegen::new()),
    }
}
