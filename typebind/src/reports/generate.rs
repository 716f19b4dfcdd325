//! Generate command report data structures.

use std::{path::PathBuf, time::Duration};

use typebind_codegen::PreviewFile;
use typebind_schema::Language;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub language: Language,
    /// Types emitted per configured package, in configuration order.
    pub packages: Vec<(String, usize)>,
    /// Packages that had no bindable types.
    pub empty_packages: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Type modules written, relative to the output directory.
    pub files: Vec<PathBuf>,
    /// Barrel files written, relative to the output directory.
    pub barrels: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

impl GenerateReport {
    pub fn total_types(&self) -> usize {
        self.packages.iter().map(|(_, count)| count).sum()
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!("{} bindings", self.language));
        for (package, count) in &self.packages {
            out.list_item(&format!(
                "{} ({} type{})",
                package,
                count,
                if *count == 1 { "" } else { "s" }
            ));
        }
        out.newline();

        out.key_value("Generated", &written.output_dir.display().to_string());
        out.key_value(
            "Files",
            &format!(
                "{} modules, {} barrels",
                written.files.len(),
                written.barrels.len()
            ),
        );
        out.key_value("Elapsed", &format!("{} ms", written.elapsed.as_millis()));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated ({} types)",
            preview.files.len(),
            self.total_types()
        ));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for package in &self.empty_packages {
            out.warning(&format!("package '{}' contains no bindable types", package));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}
