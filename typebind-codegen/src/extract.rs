//! Descriptor extraction from host types.

use typebind_ir::{
    ClassDescriptor, Descriptor, EnumDescriptor, FieldDescriptor, FieldInfo, HostPlatform,
    ImportDescriptor, ImportSet, QualifiedName, TypeInfo, TypeKind, TypeRef,
};

use crate::{Error, ImportResolver, ImportStyle, Layout, NamingConvention, Result, TypeMapper};

/// Builds descriptors for one target.
///
/// Holds the target's mapper and naming rules plus an [`ImportResolver`]
/// whose memo lives as long as the extractor.
pub struct Extractor<'a> {
    host: &'a HostPlatform,
    mapper: &'a dyn TypeMapper,
    naming: &'a NamingConvention,
    imports: ImportResolver<'a>,
}

impl<'a> Extractor<'a> {
    pub fn new(
        host: &'a HostPlatform,
        mapper: &'a dyn TypeMapper,
        naming: &'a NamingConvention,
        layout: &'a Layout,
        style: ImportStyle,
    ) -> Self {
        Self {
            host,
            mapper,
            naming,
            imports: ImportResolver::new(style, layout, naming, mapper, host),
        }
    }

    /// Extract a descriptor of whichever kind the type has.
    ///
    /// Interfaces are never generated and fail with
    /// [`Error::InputKindMismatch`].
    pub fn extract(&mut self, ty: &TypeInfo) -> Result<Descriptor> {
        match ty.kind {
            TypeKind::Enum => self.extract_enum(ty).map(Descriptor::Enum),
            _ => self.extract_class(ty).map(Descriptor::Class),
        }
    }

    pub fn extract_class(&mut self, ty: &TypeInfo) -> Result<ClassDescriptor> {
        expect_kind(ty, TypeKind::Class)?;

        let mut imports = ImportSet::new();

        let parent = ty
            .supertype
            .as_ref()
            .filter(|parent| !self.host.is_root_object(parent));
        if let Some(parent) = parent {
            self.add_import(&mut imports, &ty.name, parent)?;
        }

        let mut fields = Vec::with_capacity(ty.fields.len());
        for field in ty.fields.iter().filter(|f| !f.is_static) {
            fields.push(self.extract_field(&mut imports, &ty.name, field)?);
        }

        Ok(ClassDescriptor {
            name: self.type_symbol(&ty.name),
            parent_name: parent.map(|p| self.type_symbol(p)),
            is_abstract: ty.is_abstract,
            fields,
            imports,
        })
    }

    pub fn extract_enum(&self, ty: &TypeInfo) -> Result<EnumDescriptor> {
        expect_kind(ty, TypeKind::Enum)?;

        Ok(EnumDescriptor {
            name: self.type_symbol(&ty.name),
            values: ty.constants.clone(),
        })
    }

    fn extract_field(
        &mut self,
        imports: &mut ImportSet,
        owner: &QualifiedName,
        field: &FieldInfo,
    ) -> Result<FieldDescriptor> {
        let is_repeated = self.is_repeated(&field.ty);
        let leaf = self.leaf_type(&field.ty);

        let element = match self.mapper.builtin(&leaf) {
            Some(builtin) => builtin.to_string(),
            None => self.type_symbol(&leaf),
        };
        let type_name = if is_repeated {
            self.mapper.repeated(&element)
        } else {
            element
        };

        self.add_import(imports, owner, &leaf)?;

        let symbol_name = self.naming.symbol_name(&field.name);
        Ok(FieldDescriptor {
            display_name: self.naming.display_name(&symbol_name),
            symbol_name,
            wire_name: field.name.clone(),
            type_name,
            is_repeated,
        })
    }

    fn add_import(
        &mut self,
        imports: &mut ImportSet,
        owner: &QualifiedName,
        referenced: &QualifiedName,
    ) -> Result<()> {
        if let Some(path) = self.imports.resolve(owner, referenced)? {
            imports.insert(ImportDescriptor::new(self.type_symbol(referenced), path));
        }
        Ok(())
    }

    /// Symbol a generated type is declared and imported under.
    fn type_symbol(&self, name: &QualifiedName) -> String {
        self.naming.type_name(name.name())
    }

    /// Arrays and ordered collections become repeated fields.
    fn is_repeated(&self, ty: &TypeRef) -> bool {
        match ty {
            TypeRef::Array(_) => true,
            TypeRef::Named(name) => self.host.is_collection(name),
            TypeRef::Parameterized { raw, .. } => self.host.is_collection(raw),
            TypeRef::Wildcard { .. } => false,
        }
    }

    /// Unwrap arrays, first type arguments and wildcard upper bounds until a
    /// plain type remains.
    ///
    /// Map-like generics only contribute their first argument.
    fn leaf_type(&self, ty: &TypeRef) -> QualifiedName {
        let mut current = ty;
        loop {
            match current {
                TypeRef::Array(element) => current = &**element,
                TypeRef::Parameterized { args, .. } => match args.first() {
                    Some(first) => current = first,
                    None => return self.host.root_object_name(),
                },
                TypeRef::Wildcard { upper: Some(upper) } => current = &**upper,
                TypeRef::Wildcard { upper: None } => return self.host.root_object_name(),
                // A raw collection says nothing about its elements.
                TypeRef::Named(name) if self.host.is_collection(name) => {
                    return self.host.root_object_name();
                }
                TypeRef::Named(name) => return name.clone(),
            }
        }
    }
}

fn expect_kind(ty: &TypeInfo, expected: TypeKind) -> Result<()> {
    if ty.kind == expected {
        Ok(())
    } else {
        Err(Error::InputKindMismatch {
            name: ty.name.to_string(),
            expected,
            actual: ty.kind,
        })
    }
}
