//! Facts about the host type system.

use serde::Deserialize;

use crate::QualifiedName;

/// Host platform facts consulted during extraction.
///
/// Constructed once per run and passed by reference. The defaults describe
/// the Java platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostPlatform {
    /// The implicit root of every class hierarchy.
    pub root_object: String,
    /// Package prefixes belonging to the platform standard library.
    pub library_prefixes: Vec<String>,
    /// Raw types treated as ordered collections (repeated fields).
    pub collections: Vec<String>,
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self {
            root_object: "java.lang.Object".to_string(),
            library_prefixes: vec!["java.".to_string(), "javax.".to_string()],
            collections: [
                "java.lang.Iterable",
                "java.util.Collection",
                "java.util.List",
                "java.util.ArrayList",
                "java.util.LinkedList",
                "java.util.Set",
                "java.util.HashSet",
                "java.util.LinkedHashSet",
                "java.util.SortedSet",
                "java.util.TreeSet",
                "java.util.Queue",
                "java.util.Deque",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl HostPlatform {
    pub fn is_root_object(&self, name: &QualifiedName) -> bool {
        name.to_string() == self.root_object
    }

    /// Whether the type belongs to the platform standard library.
    pub fn is_library(&self, name: &QualifiedName) -> bool {
        let qualified = name.to_string();
        self.library_prefixes
            .iter()
            .any(|prefix| qualified.starts_with(prefix.as_str()))
    }

    pub fn is_collection(&self, name: &QualifiedName) -> bool {
        let qualified = name.to_string();
        self.collections.iter().any(|c| *c == qualified)
    }

    pub fn root_object_name(&self) -> QualifiedName {
        QualifiedName::parse(&self.root_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_defaults() {
        let host = HostPlatform::default();

        assert!(host.is_root_object(&QualifiedName::parse("java.lang.Object")));
        assert!(host.is_library(&QualifiedName::parse("java.util.Date")));
        assert!(host.is_library(&QualifiedName::parse("javax.xml.datatype.Duration")));
        assert!(!host.is_library(&QualifiedName::parse("com.example.Widget")));
        assert!(host.is_collection(&QualifiedName::parse("java.util.List")));
        assert!(!host.is_collection(&QualifiedName::parse("java.util.Map")));
    }

    #[test]
    fn test_primitive_is_not_library() {
        let host = HostPlatform::default();
        assert!(!host.is_library(&QualifiedName::parse("int")));
    }
}
