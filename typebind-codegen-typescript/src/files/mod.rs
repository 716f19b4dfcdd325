//! TypeScript file renderers.

mod class_ts;
mod enum_ts;
mod index_ts;

pub use class_ts::ClassTs;
pub use enum_ts::EnumTs;
pub use index_ts::IndexTs;

use typebind_codegen::builder::CodeBuilder;

/// Start a file with the generated-code banner.
pub(crate) fn header(year: i32) -> CodeBuilder {
    CodeBuilder::typescript()
        .line(&format!(
            "// Generated by typebind ({}). Do not edit by hand.",
            year
        ))
        .blank()
}
