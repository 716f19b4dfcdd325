//! Test utilities for target crates.
//!
//! Only available during tests or with the `testing` feature.

use typebind_core::to_snake_case;
use typebind_ir::{
    BarrelDescriptor, BarrelEntry, ClassDescriptor, EnumDescriptor, FieldInfo, QualifiedName,
    TypeInfo, TypeRef,
};

use crate::{
    ImportStyle, LanguageCodegen, NamingConvention, RESERVED_FIELD_NAMES, RenderContext,
    TypeMapper, TypeSource,
};

/// A [`TypeSource`] over a fixed list of types.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    types: Vec<TypeInfo>,
}

impl StaticSource {
    pub fn new(types: Vec<TypeInfo>) -> Self {
        Self { types }
    }

    /// The `Widget`/`Base`/`Gadget` classes plus the `Color` enum.
    ///
    /// `Widget` and `Base` live in `com.example`, `Gadget` one level down
    /// in `com.example.other`.
    pub fn widgets() -> Self {
        Self::new(vec![
            TypeInfo::class("com.example.Base")
                .abstract_type()
                .marker("XmlType")
                .field(FieldInfo::new("href", TypeRef::named("java.lang.String"))),
            TypeInfo::class("com.example.Widget")
                .supertype("com.example.Base")
                .marker("XmlType")
                .field(FieldInfo::new("default", TypeRef::named("java.lang.String")))
                .field(FieldInfo::new(
                    "interface",
                    TypeRef::parameterized(
                        "java.util.List",
                        vec![TypeRef::extends(TypeRef::named("com.example.other.Gadget"))],
                    ),
                ))
                .field(FieldInfo::static_field(
                    "VERSION",
                    TypeRef::named("java.lang.String"),
                )),
            TypeInfo::enumeration("com.example.Color")
                .marker("XmlEnum")
                .constant("RED")
                .constant("GREEN")
                .constant("BLUE"),
            TypeInfo::class("com.example.other.Gadget")
                .marker("XmlType")
                .field(FieldInfo::new("size", TypeRef::named("int")))
                .field(FieldInfo::new("owner", TypeRef::named("com.example.Widget"))),
        ])
    }
}

impl TypeSource for StaticSource {
    fn find_candidate_types(&self, scope: &str, markers: &[String]) -> Vec<TypeInfo> {
        self.types
            .iter()
            .filter(|t| t.package() == scope)
            .filter(|t| t.kind != typebind_ir::TypeKind::Interface)
            .filter(|t| markers.iter().any(|m| t.has_marker(m)))
            .cloned()
            .collect()
    }

    fn find_type(&self, qualified: &str) -> Option<TypeInfo> {
        self.types
            .iter()
            .find(|t| t.name.to_string() == qualified)
            .cloned()
    }
}

/// Minimal mapper: strings, ints and the root object.
pub struct TestMapper;

impl TypeMapper for TestMapper {
    fn language(&self) -> &'static str {
        "test"
    }

    fn builtin(&self, ty: &QualifiedName) -> Option<&'static str> {
        match ty.to_string().as_str() {
            "java.lang.String" => Some("string"),
            "int" => Some("number"),
            "java.lang.Object" => Some("any"),
            _ => None,
        }
    }
}

fn identity(s: &str) -> String {
    s.to_string()
}

fn python_symbol(s: &str) -> String {
    s.replace('$', "_")
}

/// Identity casing, as slash-path targets use.
pub fn slash_naming() -> NamingConvention {
    NamingConvention {
        type_symbol: identity,
        module_file: identity,
        package_dir: identity,
        field_display: identity,
        reserved: RESERVED_FIELD_NAMES,
    }
}

/// Snake casing, as dotted-relative targets use.
pub fn dotted_naming() -> NamingConvention {
    NamingConvention {
        type_symbol: python_symbol,
        module_file: to_snake_case,
        package_dir: to_snake_case,
        field_display: to_snake_case,
        reserved: RESERVED_FIELD_NAMES,
    }
}

/// A line-oriented target for exercising the generator without a real
/// language. Classes render as `class Name : Parent` followed by one
/// `import` and one `field` line each.
pub struct TestTarget {
    naming: NamingConvention,
}

impl TestTarget {
    pub fn new() -> Self {
        Self {
            naming: slash_naming(),
        }
    }
}

impl Default for TestTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageCodegen for TestTarget {
    fn language(&self) -> &'static str {
        "test"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn barrel_file(&self) -> &'static str {
        "index.txt"
    }

    fn import_style(&self) -> ImportStyle {
        ImportStyle::SlashPath
    }

    fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    fn type_mapper(&self) -> &dyn TypeMapper {
        &TestMapper
    }

    fn render_class(&self, class: &ClassDescriptor, _ctx: &RenderContext) -> String {
        let mut out = format!("class {}", class.name);
        if let Some(parent) = &class.parent_name {
            out.push_str(&format!(" : {}", parent));
        }
        out.push('\n');
        for import in &class.imports {
            out.push_str(&format!(
                "import {} {}\n",
                import.exported_symbol, import.module_path
            ));
        }
        for field in &class.fields {
            out.push_str(&format!("field {}: {}\n", field.symbol_name, field.type_name));
        }
        out
    }

    fn render_enum(&self, enumeration: &EnumDescriptor, _ctx: &RenderContext) -> String {
        format!("enum {} {}\n", enumeration.name, enumeration.values.join(","))
    }

    fn render_barrel(&self, barrel: &BarrelDescriptor, _ctx: &RenderContext) -> String {
        barrel
            .entries
            .iter()
            .map(|entry| match entry {
                BarrelEntry::Module { name, .. } => format!("module {}\n", name),
                BarrelEntry::SubModule { name } => format!("dir {}\n", name),
            })
            .collect()
    }
}
