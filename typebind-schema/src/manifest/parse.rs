//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;

use super::Manifest;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "typebind.toml")
    }
}

impl Manifest {
    /// Parse a typebind.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a typebind.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let generator = &manifest.generator;

    if generator.packages.is_empty() {
        return Err(ctx.validation_error("[generator] needs at least one package"));
    }
    for package in &generator.packages {
        if let Some(reason) = validate_package(package) {
            let message = format!("invalid package '{}': {}", package, reason);
            return Err(match find_string_span(ctx.src(), package) {
                Some(span) => ctx.validation_error_at(message, span),
                None => ctx.validation_error(message),
            });
        }
    }

    if generator.markers.is_empty() {
        return Err(ctx.validation_error("[generator] markers must not be empty"));
    }

    if manifest.registry.sources.is_empty() {
        return Err(ctx.validation_error("[registry] needs at least one source file"));
    }

    Ok(())
}

/// Returns the reason a package name is invalid, if it is.
fn validate_package(package: &str) -> Option<&'static str> {
    if package.is_empty() {
        return Some("package cannot be empty");
    }
    for segment in package.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Some("package has an empty segment"),
            Some(c) if !(c.is_alphabetic() || c == '_') => {
                return Some("segments must start with a letter or underscore");
            }
            Some(_) => {}
        }
        if !chars.all(|c| c.is_alphanumeric() || c == '_') {
            return Some("segments may only contain letters, digits and underscores");
        }
    }
    None
}

/// Find the quoted occurrence of `value` in the TOML source.
fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}
