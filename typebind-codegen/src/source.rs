//! Host type discovery.

use tracing::trace;
use typebind_ir::{TypeInfo, TypeKind};
use typebind_schema::Registry;

/// Where the generator finds host types.
pub trait TypeSource {
    /// Types declared directly in `scope` that carry at least one of
    /// `markers`. Interfaces are never candidates.
    fn find_candidate_types(&self, scope: &str, markers: &[String]) -> Vec<TypeInfo>;

    /// Look up a single type by qualified name.
    fn find_type(&self, qualified: &str) -> Option<TypeInfo>;
}

impl TypeSource for Registry {
    fn find_candidate_types(&self, scope: &str, markers: &[String]) -> Vec<TypeInfo> {
        self.in_package(scope)
            .filter(|ty| {
                if ty.kind == TypeKind::Interface {
                    trace!(ty = %ty.name, "skipping interface");
                    return false;
                }
                let marked = markers.iter().any(|m| ty.has_marker(m));
                if !marked {
                    trace!(ty = %ty.name, "skipping type without a generator marker");
                }
                marked
            })
            .cloned()
            .collect()
    }

    fn find_type(&self, qualified: &str) -> Option<TypeInfo> {
        self.get(qualified).cloned()
    }
}
