//! TypeScript statement builders for imports and re-exports.

mod exports;
mod imports;

pub use exports::Export;
pub use imports::Import;
