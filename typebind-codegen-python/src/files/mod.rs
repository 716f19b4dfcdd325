//! Python file renderers.

mod class_py;
mod enum_py;
mod init_py;

pub use class_py::ClassPy;
pub use enum_py::EnumPy;
pub use init_py::InitPy;

use typebind_codegen::builder::CodeBuilder;

/// Start a file with the generated-code banner.
pub(crate) fn header(year: i32) -> CodeBuilder {
    CodeBuilder::python()
        .line(&format!(
            "# Generated by typebind ({}). Do not edit by hand.",
            year
        ))
        .blank()
}
