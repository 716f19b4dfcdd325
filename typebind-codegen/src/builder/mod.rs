//! Code generation building blocks shared by the renderers.

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
