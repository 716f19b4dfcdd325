//! Per-directory `__init__.py` barrels.

use typebind_codegen::RenderContext;
use typebind_ir::{BarrelDescriptor, BarrelEntry};

use super::header;
use crate::ast::FromImport;

/// The `__init__.py` of one output directory.
///
/// Modules emitted in this run import their class by name, modules kept from
/// earlier runs are star-imported and child directories are imported as
/// sub-packages.
pub struct InitPy<'a> {
    barrel: &'a BarrelDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> InitPy<'a> {
    pub fn new(barrel: &'a BarrelDescriptor, ctx: &'a RenderContext) -> Self {
        Self { barrel, ctx }
    }

    fn import(entry: &BarrelEntry) -> FromImport {
        match entry {
            BarrelEntry::Module {
                name,
                symbol: Some(symbol),
            } => FromImport::new(format!(".{}", name)).name(symbol),
            BarrelEntry::Module { name, symbol: None } => FromImport::new(format!(".{}", name)),
            BarrelEntry::SubModule { name } => FromImport::new(".").name(name),
        }
    }

    pub fn render(&self) -> String {
        header(self.ctx.year)
            .each(&self.barrel.entries, |b, entry| Self::import(entry).render(b))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use typebind_schema::OutputType;

    use super::*;

    #[test]
    fn test_init_imports() {
        let ctx = RenderContext::new(2024, OutputType::Class);
        let barrel = BarrelDescriptor {
            directory: "example".to_string(),
            entries: vec![
                BarrelEntry::Module {
                    name: "legacy".to_string(),
                    symbol: None,
                },
                BarrelEntry::Module {
                    name: "v_app_type".to_string(),
                    symbol: Some("VAppType".to_string()),
                },
                BarrelEntry::SubModule {
                    name: "other".to_string(),
                },
            ],
        };

        assert_eq!(
            InitPy::new(&barrel, &ctx).render(),
            "# Generated by typebind (2024). Do not edit by hand.\n\
             \n\
             from .legacy import *\n\
             from .v_app_type import VAppType\n\
             from . import other\n"
        );
    }
}
