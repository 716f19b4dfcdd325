//! Target-neutral descriptors handed to renderers.
//!
//! Descriptors are built once per source type, fully populated, and never
//! mutated after the extractor returns them. They serialize to camelCase
//! JSON so that renderers living outside this workspace can consume them.

use std::collections::BTreeSet;

use serde::Serialize;

/// A module import required by a generated class.
///
/// Identity is the `(exported_symbol, module_path)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDescriptor {
    pub exported_symbol: String,
    pub module_path: String,
}

impl ImportDescriptor {
    pub fn new(exported_symbol: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            exported_symbol: exported_symbol.into(),
            module_path: module_path.into(),
        }
    }
}

/// Deduplicated set of imports.
///
/// Iteration is sorted, so rendered import blocks do not depend on the
/// order in which fields triggered them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImportSet(BTreeSet<ImportDescriptor>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an import. Returns `false` when it was already present.
    pub fn insert(&mut self, import: ImportDescriptor) -> bool {
        self.0.insert(import)
    }

    pub fn contains(&self, import: &ImportDescriptor) -> bool {
        self.0.contains(import)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportDescriptor> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a ImportDescriptor;
    type IntoIter = std::collections::btree_set::Iter<'a, ImportDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One field of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Identifier used in generated code (reserved words remapped).
    pub symbol_name: String,
    /// Identifier used on the wire; the declared field name.
    pub wire_name: String,
    /// Symbol name in the target's field casing.
    pub display_name: String,
    /// Target-language type spelling, including any repetition marker.
    pub type_name: String,
    pub is_repeated: bool,
}

impl FieldDescriptor {
    /// Whether a reserved-word remap made the symbol diverge from the wire name.
    pub fn is_remapped(&self) -> bool {
        self.symbol_name != self.wire_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    pub is_abstract: bool,
    pub fields: Vec<FieldDescriptor>,
    pub imports: ImportSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDescriptor {
    pub name: String,
    pub values: Vec<String>,
}

/// A descriptor of either kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Descriptor {
    Class(ClassDescriptor),
    Enum(EnumDescriptor),
}

impl Descriptor {
    pub fn name(&self) -> &str {
        match self {
            Descriptor::Class(c) => &c.name,
            Descriptor::Enum(e) => &e.name,
        }
    }
}

/// One line of a barrel listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BarrelEntry {
    /// A sibling module file, named without its extension.
    ///
    /// `symbol` is the type emitted into it during this run, when known.
    Module {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
    },
    /// A child directory.
    SubModule { name: String },
}

impl BarrelEntry {
    pub fn name(&self) -> &str {
        match self {
            BarrelEntry::Module { name, .. } | BarrelEntry::SubModule { name } => name,
        }
    }

    pub fn is_sub_module(&self) -> bool {
        matches!(self, BarrelEntry::SubModule { .. })
    }
}

/// Listing for one output directory's barrel/index file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarrelDescriptor {
    /// Directory relative to the output root, `/` separated, empty for the root.
    pub directory: String,
    pub entries: Vec<BarrelEntry>,
}

impl BarrelDescriptor {
    pub fn modules(&self) -> impl Iterator<Item = &BarrelEntry> {
        self.entries.iter().filter(|e| !e.is_sub_module())
    }

    pub fn sub_modules(&self) -> impl Iterator<Item = &BarrelEntry> {
        self.entries.iter().filter(|e| e.is_sub_module())
    }
}
