//! Per-directory index.ts barrels.

use typebind_codegen::RenderContext;
use typebind_ir::{BarrelDescriptor, BarrelEntry};

use super::header;
use crate::ast::Export;

/// The index.ts barrel of one output directory.
///
/// Modules emitted in this run re-export their type by name; modules kept
/// from earlier runs re-export everything. Child directories become
/// namespaces.
pub struct IndexTs<'a> {
    barrel: &'a BarrelDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> IndexTs<'a> {
    pub fn new(barrel: &'a BarrelDescriptor, ctx: &'a RenderContext) -> Self {
        Self { barrel, ctx }
    }

    fn export(entry: &BarrelEntry) -> Export {
        let from = format!("./{}", entry.name());
        match entry {
            BarrelEntry::Module {
                symbol: Some(symbol),
                ..
            } => Export::from(from).named(symbol),
            BarrelEntry::Module { symbol: None, .. } => Export::from(from),
            BarrelEntry::SubModule { name } => Export::from(from).namespace(name),
        }
    }

    pub fn render(&self) -> String {
        header(self.ctx.year)
            .each(&self.barrel.entries, |b, entry| Self::export(entry).render(b))
            .build()
    }
}
