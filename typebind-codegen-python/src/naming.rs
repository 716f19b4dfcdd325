//! Python-specific naming conventions.

use typebind_codegen::{NamingConvention, RESERVED_FIELD_NAMES};
use typebind_core::to_snake_case;

/// Class symbol for a host simple name. `$` separates nested host types and
/// is not an identifier character in Python.
fn class_symbol(name: &str) -> String {
    name.replace('$', "_")
}

/// Python naming conventions.
///
/// Module files, package directories and attributes are snake_case; class
/// names keep the host spelling apart from nesting separators.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    type_symbol: class_symbol,
    module_file: to_snake_case,
    package_dir: to_snake_case,
    field_display: to_snake_case,
    reserved: RESERVED_FIELD_NAMES,
};
