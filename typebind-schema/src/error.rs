use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for typebind-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the file content and name so error factories don't need them
/// passed separately.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    /// Create a validation error pointing at `span`.
    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    pub fn invalid_type_expr_error(
        &self,
        expr: impl Into<String>,
        reason: impl Into<String>,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::InvalidTypeExpr {
            src: self.named_source(),
            span,
            expr: expr.into(),
            reason: reason.into(),
        })
    }

    pub fn duplicate_type_error(
        &self,
        name: impl Into<String>,
        first_file: impl Into<String>,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            span,
            name: name.into(),
            first_file: first_file.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path, or run from the directory holding typebind.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", .src.name())]
    #[diagnostic(code(typebind::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid type expression '{expr}'")]
    #[diagnostic(
        code(typebind::invalid_type),
        help("type expressions look like 'String', 'int[]' or 'java.util.List<? extends Foo>'")
    )]
    InvalidTypeExpr {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        expr: String,
        reason: String,
    },

    #[error("type '{name}' is declared more than once")]
    #[diagnostic(
        code(typebind::duplicate_type),
        help("'{name}' was first declared in {first_file}")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("declared again here")]
        span: SourceSpan,
        name: String,
        first_file: String,
    },

    #[error("{message}")]
    #[diagnostic(code(typebind::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
