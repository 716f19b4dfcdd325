//! Run orchestration: discovery, extraction, rendering, writing, barrels.

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use typebind_core::{GeneratedFile, write_file};
use typebind_ir::{BarrelDescriptor, Descriptor, HostPlatform};
use typebind_schema::{GeneratorConfig, Overwrite};

use crate::{
    EmissionCache, Error, Extractor, LanguageCodegen, Layout, RenderContext, Result, TypeSource,
    barrels::{plan_barrels, scan_barrels, slash_path},
    output::prepare_output,
};

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory, `/` separated
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of an in-memory run
#[derive(Debug, Default)]
pub struct Preview {
    /// Type modules followed by barrels
    pub files: Vec<PreviewFile>,
    /// Types emitted per configured package, in configuration order
    pub packages: IndexMap<String, usize>,
    /// Packages that had no bindable types
    pub empty_packages: Vec<String>,
}

impl Preview {
    pub fn total_types(&self) -> usize {
        self.packages.values().sum()
    }
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Types emitted per configured package, in configuration order
    pub packages: IndexMap<String, usize>,
    /// Packages that had no bindable types
    pub empty_packages: Vec<String>,
    /// Type modules written, relative to the output directory
    pub files: Vec<PathBuf>,
    /// Barrel files written, relative to the output directory
    pub barrels: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl GenerateResult {
    pub fn total_types(&self) -> usize {
        self.packages.values().sum()
    }
}

/// Rendered type modules of one run, not yet written.
struct Emission {
    files: Vec<GeneratedFile>,
    packages: IndexMap<String, usize>,
    empty_packages: Vec<String>,
    cache: EmissionCache,
}

/// Drives one target over a set of host packages.
pub struct Generator<'a> {
    target: &'a dyn LanguageCodegen,
    source: &'a dyn TypeSource,
    host: &'a HostPlatform,
    layout: Layout,
    packages: Vec<String>,
    markers: Vec<String>,
    ctx: RenderContext,
}

impl<'a> Generator<'a> {
    pub fn new(
        target: &'a dyn LanguageCodegen,
        source: &'a dyn TypeSource,
        host: &'a HostPlatform,
        ctx: RenderContext,
    ) -> Self {
        Self {
            target,
            source,
            host,
            layout: Layout::default(),
            packages: Vec::new(),
            markers: Vec::new(),
            ctx,
        }
    }

    /// Generator configured from a manifest's `[generator]` table.
    pub fn from_config(
        target: &'a dyn LanguageCodegen,
        source: &'a dyn TypeSource,
        host: &'a HostPlatform,
        config: &GeneratorConfig,
        ctx: RenderContext,
    ) -> Self {
        Self::new(target, source, host, ctx)
            .layout(Layout::new(config.strip_prefix.clone()))
            .packages(config.packages.clone())
            .markers(config.markers.clone())
    }

    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }

    pub fn markers(mut self, markers: Vec<String>) -> Self {
        self.markers = markers;
        self
    }

    fn extractor(&self) -> Extractor<'_> {
        Extractor::new(
            self.host,
            self.target.type_mapper(),
            self.target.naming(),
            &self.layout,
            self.target.import_style(),
        )
    }

    /// Descriptor for a single type, `None` when the source doesn't know it.
    pub fn describe(&self, qualified: &str) -> Result<Option<Descriptor>> {
        match self.source.find_type(qualified) {
            Some(ty) => self.extractor().extract(&ty).map(Some),
            None => Ok(None),
        }
    }

    fn emit(&self) -> Result<Emission> {
        let mut extractor = self.extractor();
        let naming = self.target.naming();
        let mut emission = Emission {
            files: Vec::new(),
            packages: IndexMap::new(),
            empty_packages: Vec::new(),
            cache: EmissionCache::new(),
        };

        for package in &self.packages {
            info!(package = %package, "creating {} bindings", self.target.language());
            let candidates = self.source.find_candidate_types(package, &self.markers);
            let count = emission.packages.entry(package.clone()).or_insert(0);

            if candidates.is_empty() {
                warn!(package = %package, "package contains no bindable types");
                emission.empty_packages.push(package.clone());
                continue;
            }

            for ty in candidates {
                let file_name = format!(
                    "{}.{}",
                    naming.file_name(ty.simple_name()),
                    self.target.file_extension()
                );
                let path = self.layout.module_path(ty.package(), &file_name, naming);
                let symbol = naming.type_name(ty.simple_name());
                if !emission.cache.record(&ty.name, &path, &symbol)? {
                    debug!(ty = %ty.name, "already emitted, skipping");
                    continue;
                }

                let content = match extractor.extract(&ty)? {
                    Descriptor::Class(class) => self.target.render_class(&class, &self.ctx),
                    Descriptor::Enum(enumeration) => {
                        self.target.render_enum(&enumeration, &self.ctx)
                    }
                };
                debug!(ty = %ty.name, path = %path.display(), "rendered");
                emission.files.push(GeneratedFile::new(path, content));
                *count += 1;
            }
        }

        Ok(emission)
    }

    fn barrel_path(&self, barrel: &BarrelDescriptor) -> PathBuf {
        let mut path: PathBuf = barrel.directory.split('/').filter(|s| !s.is_empty()).collect();
        path.push(self.target.barrel_file());
        path
    }

    /// Render everything in memory, barrels included.
    pub fn preview(&self) -> Result<Preview> {
        let emission = self.emit()?;
        let barrels = plan_barrels(
            emission.files.iter().map(GeneratedFile::path),
            self.target.barrel_file(),
            self.target.file_extension(),
            &emission.cache,
        );

        let mut files: Vec<PreviewFile> = emission
            .files
            .iter()
            .map(|f| PreviewFile {
                path: slash_path(f.path()),
                content: f.content().to_string(),
            })
            .collect();
        files.extend(barrels.iter().map(|barrel| PreviewFile {
            path: slash_path(&self.barrel_path(barrel)),
            content: self.target.render_barrel(barrel, &self.ctx),
        }));
        Ok(Preview {
            files,
            packages: emission.packages,
            empty_packages: emission.empty_packages,
        })
    }

    /// Generate into `output_dir`.
    ///
    /// Everything is rendered before `overwrite` touches the directory, so a
    /// failed run leaves existing output in place.
    pub fn generate(&self, output_dir: &Path, overwrite: Overwrite) -> Result<GenerateResult> {
        let start = Instant::now();
        let emission = self.emit()?;
        prepare_output(output_dir, overwrite)?;

        std::fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

        let mut files = Vec::with_capacity(emission.files.len());
        for file in &emission.files {
            file.write_under(output_dir)
                .map_err(|e| Error::io(output_dir.join(file.path()), e))?;
            files.push(file.path().to_path_buf());
        }

        let barrels = scan_barrels(
            output_dir,
            self.target.barrel_file(),
            self.target.file_extension(),
            &emission.cache,
        )?;
        let mut barrel_paths = Vec::with_capacity(barrels.len());
        for barrel in &barrels {
            let relative = self.barrel_path(barrel);
            let full = output_dir.join(&relative);
            write_file(&full, &self.target.render_barrel(barrel, &self.ctx))
                .map_err(|e| Error::io(&full, e))?;
            barrel_paths.push(relative);
        }

        let elapsed = start.elapsed();
        info!("complete in {} ms", elapsed.as_millis());

        Ok(GenerateResult {
            packages: emission.packages,
            empty_packages: emission.empty_packages,
            files,
            barrels: barrel_paths,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use typebind_schema::OutputType;

    use typebind_ir::{FieldInfo, TypeInfo, TypeRef};

    use super::*;
    use crate::testing::{StaticSource, TestTarget};

    fn generator<'a>(
        target: &'a TestTarget,
        source: &'a StaticSource,
        host: &'a HostPlatform,
        packages: &[&str],
    ) -> Generator<'a> {
        Generator::new(
            target,
            source,
            host,
            RenderContext::new(2024, OutputType::Class),
        )
        .layout(Layout::new("com."))
        .packages(packages.iter().map(|p| p.to_string()).collect())
        .markers(vec!["XmlType".to_string(), "XmlEnum".to_string()])
    }

    fn find<'f>(files: &'f [PreviewFile], path: &str) -> &'f str {
        files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
            .unwrap_or_else(|| panic!("{path} not generated"))
    }

    #[test]
    fn test_preview_renders_types_and_barrels() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let preview = generator(&target, &source, &host, &["com.example", "com.example.other"])
            .preview()
            .unwrap();
        let files = &preview.files;

        assert_eq!(preview.total_types(), 4);
        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "example/Base.txt",
                "example/Widget.txt",
                "example/Color.txt",
                "example/other/Gadget.txt",
                "index.txt",
                "example/index.txt",
                "example/other/index.txt",
            ]
        );

        assert_eq!(
            find(files, "example/Widget.txt"),
            "class Widget : Base\n\
             import Base ./Base\n\
             import Gadget ./other/Gadget\n\
             field _default: string\n\
             field _interface: Gadget[]\n"
        );
        assert_eq!(find(files, "example/Color.txt"), "enum Color RED,GREEN,BLUE\n");
        assert_eq!(
            find(files, "example/other/Gadget.txt"),
            "class Gadget\nimport Widget ../Widget\nfield size: number\nfield owner: Widget\n"
        );
        assert_eq!(
            find(files, "example/index.txt"),
            "module Base\nmodule Color\nmodule Widget\ndir other\n"
        );
        assert_eq!(find(files, "index.txt"), "dir example\n");
    }

    #[test]
    fn test_empty_package_is_not_an_error() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let temp = TempDir::new().unwrap();

        let result = generator(&target, &source, &host, &["com.example.missing"])
            .generate(temp.path(), Overwrite::None)
            .unwrap();

        assert_eq!(result.empty_packages, vec!["com.example.missing"]);
        assert_eq!(result.total_types(), 0);
        assert_eq!(result.barrels, vec![PathBuf::from("index.txt")]);
    }

    #[test]
    fn test_overlapping_scopes_emit_once() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let preview = generator(&target, &source, &host, &["com.example", "com.example"])
            .preview()
            .unwrap();

        assert_eq!(preview.packages["com.example"], 3);
        let widgets = preview.files.iter().filter(|f| f.path == "example/Widget.txt").count();
        assert_eq!(widgets, 1);
    }

    #[test]
    fn test_generate_writes_files_and_barrels() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let temp = TempDir::new().unwrap();

        let result = generator(&target, &source, &host, &["com.example", "com.example.other"])
            .generate(temp.path(), Overwrite::None)
            .unwrap();

        assert_eq!(result.packages["com.example"], 3);
        assert_eq!(result.packages["com.example.other"], 1);
        assert_eq!(result.files.len(), 4);
        assert_eq!(result.barrels.len(), 3);
        assert!(temp.path().join("example/other/Gadget.txt").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("example/other/index.txt")).unwrap(),
            "module Gadget\n"
        );
    }

    #[test]
    fn test_generate_refuses_non_empty_output_before_writing() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("stale.txt"), "stale").unwrap();

        let err = generator(&target, &source, &host, &["com.example"])
            .generate(temp.path(), Overwrite::None)
            .unwrap_err();

        assert!(matches!(err, Error::OutputStateConflict { .. }));
        assert!(!temp.path().join("example").exists());
    }

    #[test]
    fn test_merge_lists_existing_modules_in_barrels() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("example")).unwrap();
        fs::write(temp.path().join("example/Legacy.txt"), "class Legacy\n").unwrap();

        generator(&target, &source, &host, &["com.example"])
            .generate(temp.path(), Overwrite::Merge)
            .unwrap();

        let barrel = fs::read_to_string(temp.path().join("example/index.txt")).unwrap();
        assert_eq!(barrel, "module Base\nmodule Color\nmodule Legacy\nmodule Widget\n");
    }

    #[test]
    fn test_full_overwrite_drops_stale_modules() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("example")).unwrap();
        fs::write(temp.path().join("example/Legacy.txt"), "class Legacy\n").unwrap();

        generator(&target, &source, &host, &["com.example"])
            .generate(temp.path(), Overwrite::Full)
            .unwrap();

        assert!(!temp.path().join("example/Legacy.txt").exists());
        let barrel = fs::read_to_string(temp.path().join("example/index.txt")).unwrap();
        assert!(!barrel.contains("Legacy"));
    }

    #[test]
    fn test_failed_full_overwrite_keeps_existing_output() {
        let (target, host) = (TestTarget::new(), HostPlatform::default());
        let source = StaticSource::new(vec![
            TypeInfo::class("com.example.Widget").marker("XmlType"),
            TypeInfo::class("com.example.Broken")
                .marker("XmlType")
                .field(FieldInfo::new("mystery", TypeRef::named("Mystery"))),
        ]);
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("example")).unwrap();
        fs::write(temp.path().join("example/Legacy.txt"), "class Legacy\n").unwrap();

        let err = generator(&target, &source, &host, &["com.example"])
            .generate(temp.path(), Overwrite::Full)
            .unwrap_err();

        assert!(matches!(err, Error::UnresolvedReference { .. }));
        assert_eq!(
            fs::read_to_string(temp.path().join("example/Legacy.txt")).unwrap(),
            "class Legacy\n"
        );
        assert!(!temp.path().join("example/Widget.txt").exists());
    }

    #[test]
    fn test_describe() {
        let (target, source, host) = (TestTarget::new(), StaticSource::widgets(), HostPlatform::default());
        let generator = generator(&target, &source, &host, &[]);

        match generator.describe("com.example.Widget").unwrap() {
            Some(Descriptor::Class(class)) => assert_eq!(class.fields.len(), 2),
            other => panic!("unexpected descriptor: {other:?}"),
        }
        assert!(generator.describe("com.example.Missing").unwrap().is_none());
    }
}
