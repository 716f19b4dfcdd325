//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from manifest and registry validation.
#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub language: String,
    /// Number of types across all registry files.
    pub registry_types: usize,
    pub packages: Vec<PackageSummary>,
}

/// Candidate types found for one configured package.
#[derive(Debug)]
pub struct PackageSummary {
    pub name: String,
    /// Output directory relative to the output root.
    pub directory: String,
    pub candidates: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for package in self.packages.iter().filter(|p| p.candidates == 0) {
            out.warning(&format!("package '{}' contains no bindable types", package.name));
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("Language", &self.language);
        out.key_value("Registry types", &self.registry_types.to_string());
        out.newline();

        out.section(&format!("Packages ({})", self.packages.len()));
        for package in &self.packages {
            let directory = if package.directory.is_empty() {
                "."
            } else {
                package.directory.as_str()
            };
            out.list_item(&format!(
                "{} -> {}/ ({} candidate{})",
                package.name,
                directory,
                package.candidates,
                if package.candidates == 1 { "" } else { "s" }
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_check_report() {
        let report = CheckReport {
            config_path: PathBuf::from("typebind.toml"),
            language: "python".to_string(),
            registry_types: 4,
            packages: vec![
                PackageSummary {
                    name: "com.vmware.vcloud.api".to_string(),
                    directory: "vcloud/api".to_string(),
                    candidates: 1,
                },
                PackageSummary {
                    name: "com.vmware".to_string(),
                    directory: String::new(),
                    candidates: 0,
                },
            ],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: package 'com.vmware' contains no bindable types",
                "✓ typebind.toml is valid",
                "",
                "Language: python",
                "Registry types: 4",
                "",
                "Packages (2):",
                "  - com.vmware.vcloud.api -> vcloud/api/ (1 candidate)",
                "  - com.vmware -> ./ (0 candidates)",
            ]
        );
    }
}
