//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, PackageSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use output::{Report, TerminalOutput};
