//! Mapping from host packages to output directories.

use std::path::PathBuf;

use crate::NamingConvention;

/// Maps a host package to its directory under the output root.
///
/// The configured prefix is stripped and the remaining dotted segments
/// become nested directories:
///
/// ```
/// use typebind_codegen::Layout;
///
/// let layout = Layout::new("com.vmware.");
/// assert_eq!(layout.segments("com.vmware.vcloud.api"), vec!["vcloud", "api"]);
/// assert_eq!(layout.relative_dir("org.example"), "org/example");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    strip_prefix: String,
}

impl Layout {
    pub fn new(strip_prefix: impl Into<String>) -> Self {
        Self {
            strip_prefix: strip_prefix.into(),
        }
    }

    pub fn strip_prefix(&self) -> &str {
        &self.strip_prefix
    }

    /// Directory segments for a package, outermost first.
    pub fn segments(&self, package: &str) -> Vec<String> {
        let rest = package
            .strip_prefix(self.strip_prefix.as_str())
            .unwrap_or(package);
        rest.split('.')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Directory names for a package under a target's naming rules.
    pub fn dirs(&self, package: &str, naming: &NamingConvention) -> Vec<String> {
        self.segments(package)
            .iter()
            .map(|s| naming.dir_name(s))
            .collect()
    }

    /// `/`-separated directory for a package, empty for the output root.
    pub fn relative_dir(&self, package: &str) -> String {
        self.segments(package).join("/")
    }

    /// Output-relative path of the module holding a type.
    pub fn module_path(
        &self,
        package: &str,
        file_name: &str,
        naming: &NamingConvention,
    ) -> PathBuf {
        let mut path: PathBuf = self.dirs(package, naming).iter().collect();
        path.push(file_name);
        path
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("com.vmware.")
    }
}
