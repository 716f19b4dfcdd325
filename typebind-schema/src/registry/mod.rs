//! Type registry files describing the host schema.
//!
//! A registry file lists `[[types]]` tables. Several files can be loaded
//! together; qualified names must be unique across all of them.

mod type_expr;

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;
pub use type_expr::{TypeExprError, parse_type_expr};
use typebind_ir::{FieldInfo, QualifiedName, TypeInfo, TypeKind, TypeRef};

use crate::{Error, Result, error::SourceContext};

/// Package whose types are visible without qualification.
const IMPLICIT_PACKAGE: &str = "java.lang";

const IMPLICIT_TYPES: &[&str] = &[
    "Boolean",
    "Byte",
    "Character",
    "Class",
    "Double",
    "Enum",
    "Float",
    "Integer",
    "Iterable",
    "Long",
    "Number",
    "Object",
    "Short",
    "String",
    "Void",
];

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    #[default]
    Class,
    Enum,
    Interface,
}

impl From<RawKind> for TypeKind {
    fn from(kind: RawKind) -> Self {
        match kind {
            RawKind::Class => TypeKind::Class,
            RawKind::Enum => TypeKind::Enum,
            RawKind::Interface => TypeKind::Interface,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawType {
    name: Spanned<String>,
    #[serde(default)]
    kind: RawKind,
    #[serde(default)]
    supertype: Option<Spanned<String>>,
    #[serde(default, rename = "abstract")]
    is_abstract: bool,
    #[serde(default)]
    markers: Vec<String>,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    constants: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: Spanned<String>,
    #[serde(default, rename = "static")]
    is_static: bool,
}

/// All host types known to a run, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: IndexMap<String, TypeInfo>,
}

impl Registry {
    /// Load and merge registry files.
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            sources.push(SourceContext::new(content, path.display().to_string()));
        }
        Self::from_sources(&sources)
    }

    /// Parse a single registry file from a string.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        Self::from_sources(&[SourceContext::new(content, filename)])
    }

    fn from_sources(sources: &[SourceContext]) -> Result<Self> {
        let mut parsed = Vec::with_capacity(sources.len());
        let mut origins: HashMap<String, &str> = HashMap::new();

        for ctx in sources {
            let raw: RawRegistry = toml::from_str(ctx.src()).map_err(|e| ctx.parse_error(e))?;
            for ty in &raw.types {
                let name = ty.name.get_ref();
                if let Some(first) = origins.get(name.as_str()) {
                    return Err(ctx.duplicate_type_error(
                        name.clone(),
                        *first,
                        SourceSpan::from(ty.name.span()),
                    ));
                }
                origins.insert(name.clone(), ctx.filename());
            }
            parsed.push((ctx, raw));
        }

        let declared: HashSet<&str> = origins.keys().map(String::as_str).collect();
        let mut types = IndexMap::new();
        for (ctx, raw) in &parsed {
            for ty in &raw.types {
                let info = build_type(ctx, ty, &declared)?;
                types.insert(info.name.to_string(), info);
            }
        }

        Ok(Self { types })
    }

    /// Look up a type by qualified name.
    pub fn get(&self, qualified: &str) -> Option<&TypeInfo> {
        self.types.get(qualified)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.values()
    }

    /// Types declared directly in `package` (sub-packages excluded).
    pub fn in_package<'a>(&'a self, package: &'a str) -> impl Iterator<Item = &'a TypeInfo> {
        self.types.values().filter(move |t| t.package() == package)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn build_type(ctx: &SourceContext, raw: &RawType, declared: &HashSet<&str>) -> Result<TypeInfo> {
    let name = QualifiedName::parse(raw.name.get_ref());
    if !name.has_package() {
        return Err(ctx.validation_error_at(
            format!("type '{}' must be fully qualified", name),
            raw.name.span(),
        ));
    }

    let kind = TypeKind::from(raw.kind);
    if kind != TypeKind::Enum && !raw.constants.is_empty() {
        return Err(ctx.validation_error_at(
            format!("only enums declare constants, '{}' is a {}", name, kind),
            raw.name.span(),
        ));
    }

    let resolver = NameResolver {
        package: name.package(),
        declared,
    };

    let supertype = raw
        .supertype
        .as_ref()
        .map(|s| {
            match parse_spanned(ctx, s)? {
                TypeRef::Named(q) | TypeRef::Parameterized { raw: q, .. } => Ok(resolver.qualify(q)),
                _ => Err(ctx.validation_error_at("supertype must be a class name", s.span())),
            }
        })
        .transpose()?;

    let mut fields = Vec::with_capacity(raw.fields.len());
    for field in &raw.fields {
        let ty = resolver.resolve(parse_spanned(ctx, &field.ty)?);
        fields.push(FieldInfo {
            name: field.name.clone(),
            ty,
            is_static: field.is_static,
        });
    }

    Ok(TypeInfo {
        name,
        kind,
        supertype,
        is_abstract: raw.is_abstract,
        fields,
        constants: raw.constants.clone(),
        markers: raw.markers.clone(),
    })
}

fn parse_spanned(ctx: &SourceContext, expr: &Spanned<String>) -> Result<TypeRef> {
    parse_type_expr(expr.get_ref()).map_err(|e| {
        // Skip the opening quote of the TOML string.
        let offset = expr.span().start + 1 + e.offset;
        ctx.invalid_type_expr_error(expr.get_ref().clone(), e.reason, SourceSpan::from((offset, 1)))
    })
}

/// Qualifies simple names the way the host compiler would for a type in
/// `package`: same package first, then the implicit package. Primitives and
/// unknown names stay as written.
struct NameResolver<'a> {
    package: &'a str,
    declared: &'a HashSet<&'a str>,
}

impl NameResolver<'_> {
    fn qualify(&self, name: QualifiedName) -> QualifiedName {
        if name.has_package() || PRIMITIVES.contains(&name.name()) {
            return name;
        }
        let local = format!("{}.{}", self.package, name.name());
        if self.declared.contains(local.as_str()) {
            return QualifiedName::new(self.package, name.name());
        }
        if IMPLICIT_TYPES.contains(&name.name()) {
            return QualifiedName::new(IMPLICIT_PACKAGE, name.name());
        }
        name
    }

    fn resolve(&self, ty: TypeRef) -> TypeRef {
        match ty {
            TypeRef::Named(q) => TypeRef::Named(self.qualify(q)),
            TypeRef::Array(element) => TypeRef::array(self.resolve(*element)),
            TypeRef::Parameterized { raw, args } => TypeRef::Parameterized {
                raw: self.qualify(raw),
                args: args.into_iter().map(|a| self.resolve(a)).collect(),
            },
            TypeRef::Wildcard { upper } => TypeRef::Wildcard {
                upper: upper.map(|u| Box::new(self.resolve(*u))),
            },
        }
    }
}
