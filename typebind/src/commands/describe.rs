use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typebind_schema::{Language, ManifestFile};

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct DescribeCommand {
    /// Fully qualified host type name, e.g. com.vmware.vcloud.api.rest.schema.LinkType
    pub type_name: String,

    /// Path to typebind.toml (defaults to ./typebind.toml)
    #[arg(short, long, default_value = "typebind.toml")]
    pub config: PathBuf,

    /// Target language (overrides typebind.toml setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl DescribeCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let registry = file.load_registry().unwrap_or_exit();
        let language = self
            .language
            .unwrap_or(file.manifest().generator.language);

        println!("{}", ops::describe(&file, &registry, language, &self.type_name)?);
        Ok(())
    }
}
