use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typebind_schema::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to typebind.toml (defaults to ./typebind.toml)
    #[arg(short, long, default_value = "typebind.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let registry = file.load_registry().unwrap_or_exit();

        let report = ops::check(&file, &registry)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
