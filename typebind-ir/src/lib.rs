//! Intermediate representation types for typebind.
//!
//! This crate holds the two halves of the pipeline's data model:
//!
//! - the **host type model** ([`TypeInfo`], [`TypeRef`], [`QualifiedName`]),
//!   which describes the structural schema types being converted, and
//! - the **descriptors** ([`ClassDescriptor`], [`EnumDescriptor`],
//!   [`BarrelDescriptor`]), which are the target-neutral output handed to
//!   renderers.
//!
//! # Architecture
//!
//! ```text
//! type registry → TypeInfo (host model) → extractor → descriptors → renderer
//! ```
//!
//! The types here are language-agnostic and carry no behavior beyond simple
//! queries; mapping and naming rules live in `typebind-codegen`.

mod descriptor;
mod host;
mod types;

pub use descriptor::{
    BarrelDescriptor, BarrelEntry, ClassDescriptor, Descriptor, EnumDescriptor, FieldDescriptor,
    ImportDescriptor, ImportSet,
};
pub use host::HostPlatform;
pub use types::{FieldInfo, QualifiedName, TypeInfo, TypeKind, TypeRef};
