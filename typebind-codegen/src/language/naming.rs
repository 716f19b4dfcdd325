//! Identifier rules for generated code.

/// Field names that collide with keywords of some target and their
/// replacement symbols.
pub const RESERVED_FIELD_NAMES: &[(&str, &str)] =
    &[("default", "_default"), ("interface", "_interface")];

/// Per-target naming rules.
///
/// The remap table only touches the symbol; the wire name of a field
/// always stays the declared name.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Host simple name -> class, import and barrel symbol
    pub type_symbol: fn(&str) -> String,
    /// Type name -> module file name, without extension
    pub module_file: fn(&str) -> String,
    /// Package segment -> directory name
    pub package_dir: fn(&str) -> String,
    /// Field symbol -> name shown in generated code
    pub field_display: fn(&str) -> String,
    /// Declared field name -> replacement symbol
    pub reserved: &'static [(&'static str, &'static str)],
}

impl NamingConvention {
    /// Check if a declared field name gets remapped.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.iter().any(|(from, _)| *from == name)
    }

    /// Symbol for a declared field name.
    pub fn symbol_name(&self, name: &str) -> String {
        self.reserved
            .iter()
            .find(|(from, _)| *from == name)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| name.to_string())
    }

    /// Symbol a host type is declared, imported and re-exported under.
    ///
    /// Nested host types (`Outer$Inner`) keep their `$` where the target
    /// allows it in identifiers.
    pub fn type_name(&self, simple_name: &str) -> String {
        (self.type_symbol)(simple_name)
    }

    pub fn display_name(&self, symbol: &str) -> String {
        (self.field_display)(symbol)
    }

    /// Module file name (without extension) for a type name.
    pub fn file_name(&self, type_name: &str) -> String {
        (self.module_file)(type_name)
    }

    pub fn dir_name(&self, segment: &str) -> String {
        (self.package_dir)(segment)
    }
}
