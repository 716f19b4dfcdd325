//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait implemented by each target
//! - [`TypeMapper`] - Maps host leaf types to target spellings
//! - [`NamingConvention`] - Casing and reserved-word rules
//! - [`RenderContext`] - Per-run values handed to renderers

mod naming;
mod traits;

pub use naming::{NamingConvention, RESERVED_FIELD_NAMES};
pub use traits::{LanguageCodegen, RenderContext, TypeMapper};
