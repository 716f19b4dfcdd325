//! TypeScript-specific naming conventions.

use typebind_codegen::{NamingConvention, RESERVED_FIELD_NAMES};

fn keep(name: &str) -> String {
    name.to_string()
}

/// TypeScript naming conventions.
///
/// Module files and symbols are named after the type (`$` is a valid
/// identifier character), directories after the package segment, and fields
/// keep their declared casing. Only the reserved-word remap changes anything.
pub const TS_NAMING: NamingConvention = NamingConvention {
    type_symbol: keep,
    module_file: keep,
    package_dir: keep,
    field_display: keep,
    reserved: RESERVED_FIELD_NAMES,
};
