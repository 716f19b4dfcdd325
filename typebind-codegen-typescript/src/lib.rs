//! TypeScript target for typebind.
//!
//! Renders class, interface and enum descriptors into one `.ts` module per
//! type and writes an `index.ts` barrel into every output directory.
//!
//! ```ignore
//! use typebind_codegen::{Generator, RenderContext};
//! use typebind_codegen_typescript::TypeScriptCodegen;
//!
//! let target = TypeScriptCodegen::new();
//! let generator = Generator::from_config(&target, &registry, &host, &config, ctx);
//! let files = generator.preview()?;
//! ```
//!
//! # Generated Output
//!
//! - `<package dirs>/<Type>.ts` - `export class`, `export interface` or `export enum`
//! - `<package dirs>/index.ts` - re-exports of sibling modules and child directories

mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::TypeScriptCodegen;
pub use naming::TS_NAMING;
pub use type_mapper::TypeScriptTypeMapper;
