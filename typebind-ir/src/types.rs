//! Host type model.

use std::fmt;

/// A fully-qualified host type name, split into package and simple name.
///
/// Inner types keep the host's inner-type separator in their simple name
/// (e.g. `Outer$Inner`). Primitive types have an empty package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    package: String,
    name: String,
}

impl QualifiedName {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Split a dotted name at its last `.`.
    ///
    /// ```
    /// use typebind_ir::QualifiedName;
    ///
    /// let q = QualifiedName::parse("com.example.Widget");
    /// assert_eq!(q.package(), "com.example");
    /// assert_eq!(q.name(), "Widget");
    /// ```
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((package, name)) => Self::new(package, name),
            None => Self::new("", qualified),
        }
    }

    /// The declaring package (module location), empty when unknown.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this name carries a module location.
    pub fn has_package(&self) -> bool {
        !self.package.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// A declared type expression, as written on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A plain (possibly raw) type.
    Named(QualifiedName),
    /// An array of the element type.
    Array(Box<TypeRef>),
    /// A generic type with type arguments, e.g. `List<Foo>`.
    Parameterized {
        raw: QualifiedName,
        args: Vec<TypeRef>,
    },
    /// A wildcard argument. `None` means unbounded (`?` or `? super T`).
    Wildcard { upper: Option<Box<TypeRef>> },
}

impl TypeRef {
    pub fn named(qualified: &str) -> Self {
        Self::Named(QualifiedName::parse(qualified))
    }

    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn parameterized(raw: &str, args: Vec<TypeRef>) -> Self {
        Self::Parameterized {
            raw: QualifiedName::parse(raw),
            args,
        }
    }

    /// `? extends upper`.
    pub fn extends(upper: TypeRef) -> Self {
        Self::Wildcard {
            upper: Some(Box::new(upper)),
        }
    }

    /// `?`.
    pub fn wildcard() -> Self {
        Self::Wildcard { upper: None }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(q) => write!(f, "{}", q),
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::Parameterized { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeRef::Wildcard { upper: None } => write!(f, "?"),
            TypeRef::Wildcard { upper: Some(upper) } => write!(f, "? extends {}", upper),
        }
    }
}

/// The kind of a host type, decided once at discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Enum,
    Interface,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Enum => "enum",
            TypeKind::Interface => "interface",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A declared field of a host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    /// Class-level field; carries no per-instance wire data.
    pub is_static: bool,
}

impl FieldInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: false,
        }
    }

    pub fn static_field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            is_static: true,
        }
    }
}

/// Everything the generator needs to know about one host type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: QualifiedName,
    pub kind: TypeKind,
    /// Declared supertype, `None` for enums, interfaces and types whose
    /// source declares none.
    pub supertype: Option<QualifiedName>,
    pub is_abstract: bool,
    /// Declared fields in declaration order.
    pub fields: Vec<FieldInfo>,
    /// Enum constants in declaration order.
    pub constants: Vec<String>,
    /// Schema markers carried by the type (e.g. `XmlType`).
    pub markers: Vec<String>,
}

impl TypeInfo {
    pub fn class(qualified: &str) -> Self {
        Self::with_kind(qualified, TypeKind::Class)
    }

    pub fn enumeration(qualified: &str) -> Self {
        Self::with_kind(qualified, TypeKind::Enum)
    }

    fn with_kind(qualified: &str, kind: TypeKind) -> Self {
        Self {
            name: QualifiedName::parse(qualified),
            kind,
            supertype: None,
            is_abstract: false,
            fields: Vec::new(),
            constants: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn supertype(mut self, qualified: &str) -> Self {
        self.supertype = Some(QualifiedName::parse(qualified));
        self
    }

    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constants.push(name.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn simple_name(&self) -> &str {
        self.name.name()
    }

    pub fn package(&self) -> &str {
        self.name.package()
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified_name() {
        let q = QualifiedName::parse("com.vmware.vcloud.api.LinkType");
        assert_eq!(q.package(), "com.vmware.vcloud.api");
        assert_eq!(q.name(), "LinkType");
        assert!(q.has_package());
    }

    #[test]
    fn test_parse_primitive_has_no_package() {
        let q = QualifiedName::parse("int");
        assert_eq!(q.package(), "");
        assert_eq!(q.name(), "int");
        assert!(!q.has_package());
        assert_eq!(q.to_string(), "int");
    }

    #[test]
    fn test_type_ref_display() {
        let ty = TypeRef::parameterized(
            "java.util.List",
            vec![TypeRef::extends(TypeRef::named("com.example.Gadget"))],
        );
        assert_eq!(
            ty.to_string(),
            "java.util.List<? extends com.example.Gadget>"
        );
        assert_eq!(TypeRef::array(TypeRef::named("byte")).to_string(), "byte[]");
    }

    #[test]
    fn test_type_info_builder() {
        let info = TypeInfo::class("com.example.Widget")
            .supertype("com.example.Base")
            .abstract_type()
            .marker("XmlType")
            .field(FieldInfo::new("name", TypeRef::named("java.lang.String")));

        assert_eq!(info.simple_name(), "Widget");
        assert_eq!(info.package(), "com.example");
        assert!(info.is_abstract);
        assert!(info.has_marker("XmlType"));
        assert!(!info.has_marker("XmlEnum"));
        assert_eq!(info.fields.len(), 1);
    }
}
