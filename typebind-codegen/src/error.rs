use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use typebind_ir::TypeKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generation errors. Any of them aborts the run.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{name}' is a{} {actual}, expected a{} {expected}", article(.actual), article(.expected))]
    #[diagnostic(code(typebind::input_kind_mismatch))]
    InputKindMismatch {
        name: String,
        expected: TypeKind,
        actual: TypeKind,
    },

    #[error("output directory '{}' is not empty", .path.display())]
    #[diagnostic(
        code(typebind::output_not_empty),
        help("pass '--overwrite full' to replace its contents or '--overwrite merge' to keep them")
    )]
    OutputStateConflict { path: PathBuf },

    #[error("failed to access '{}'", .path.display())]
    #[diagnostic(code(typebind::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot import '{referenced}' into '{referencing}': the type has no package")]
    #[diagnostic(
        code(typebind::unresolved_reference),
        help("qualify the type name in the registry, e.g. 'com.example.{referenced}'")
    )]
    UnresolvedReference {
        referencing: String,
        referenced: String,
    },

    #[error("'{first}' and '{second}' both map to module '{}'", .module.display())]
    #[diagnostic(
        code(typebind::module_collision),
        help("rename one of the types or generate their packages in separate runs")
    )]
    ModuleCollision {
        module: PathBuf,
        first: String,
        second: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

fn article(kind: &TypeKind) -> &'static str {
    match kind {
        TypeKind::Enum | TypeKind::Interface => "n",
        TypeKind::Class => "",
    }
}
