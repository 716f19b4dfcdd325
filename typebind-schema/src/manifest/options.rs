//! Generator option enums shared by the manifest and the CLI.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported target languages for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript modules with `index.ts` barrels
    TypeScript,
    /// Python modules with `__init__.py` barrels
    Python,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typescript" | "ts" => Ok(Language::TypeScript),
            "python" | "py" => Ok(Language::Python),
            _ => Err(format!(
                "unknown language '{}', expected 'typescript' or 'python'",
                s
            )),
        }
    }
}

/// What to do with an output directory that already has content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overwrite {
    /// Refuse to run against a non-empty output directory.
    #[default]
    None,
    /// Delete the existing contents first.
    Full,
    /// Keep existing files, overwriting only the ones generated again.
    Merge,
}

impl Overwrite {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overwrite::None => "none",
            Overwrite::Full => "full",
            Overwrite::Merge => "merge",
        }
    }
}

impl fmt::Display for Overwrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Overwrite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Overwrite::None),
            "full" => Ok(Overwrite::Full),
            "merge" => Ok(Overwrite::Merge),
            _ => Err(format!(
                "unknown overwrite policy '{}', expected 'none', 'full' or 'merge'",
                s
            )),
        }
    }
}

/// Shape of generated class types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    #[default]
    Class,
    /// Structural interfaces; targets without them render classes.
    Interface,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Class => "class",
            OutputType::Interface => "interface",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(OutputType::Class),
            "interface" => Ok(OutputType::Interface),
            _ => Err(format!(
                "unknown output type '{}', expected 'class' or 'interface'",
                s
            )),
        }
    }
}
