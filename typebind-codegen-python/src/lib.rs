//! Python target for typebind.
//!
//! # Generated Output
//!
//! - `<package dirs>/<type_name>.py` - a class with an `_attribute_map`, or a
//!   `str`-valued `Enum`
//! - `<package dirs>/__init__.py` - imports of sibling modules and sub-packages
//!
//! Imports between generated modules are relative (`from ..link_type import
//! LinkType`), so the output tree can be dropped into any package.

mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::PythonCodegen;
pub use naming::PYTHON_NAMING;
pub use type_mapper::PythonTypeMapper;
