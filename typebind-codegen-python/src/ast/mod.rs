//! Python statement builders.

mod imports;

pub use imports::{FromImport, ImportBlock};
