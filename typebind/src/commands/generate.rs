use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typebind_schema::{Language, ManifestFile, OutputType, Overwrite};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to typebind.toml (defaults to ./typebind.toml)
    #[arg(short, long, default_value = "typebind.toml")]
    pub config: PathBuf,

    /// Output directory (overrides typebind.toml setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (overrides typebind.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// What to do with existing output: none, full or merge
    #[arg(short = 'x', long)]
    pub overwrite: Option<Overwrite>,

    /// Emit classes or interfaces (TypeScript only)
    #[arg(short = 't', long)]
    pub output_type: Option<OutputType>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let registry = file.load_registry().unwrap_or_exit();

        let options = self.options(&file);
        let report = ops::generate(&file, &registry, &options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Manifest settings with command-line overrides applied.
    fn options(&self, file: &ManifestFile) -> GenerateOptions {
        let mut options = GenerateOptions::from_manifest(file);
        if let Some(language) = self.language {
            options.language = language;
        }
        if let Some(overwrite) = self.overwrite {
            options.overwrite = overwrite;
        }
        if let Some(output_type) = self.output_type {
            options.output_type = output_type;
        }
        if let Some(output) = &self.output {
            options.output_dir = Some(output.clone());
        }
        if self.dry_run {
            options.output_dir = None;
        }
        options
    }
}
