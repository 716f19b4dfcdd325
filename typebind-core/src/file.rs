use std::{
    io,
    path::{Path, PathBuf},
};

/// Write `content` to `path`, creating parent directories as needed.
///
/// Returns `false` without touching the file when it already holds exactly
/// `content`, so merged reruns keep timestamps of unchanged modules.
pub fn write_file(path: &Path, content: &str) -> io::Result<bool> {
    match std::fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => return Ok(false),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(true)
}

/// A rendered module, addressed relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    relative_path: PathBuf,
    content: String,
}

impl GeneratedFile {
    pub fn new(relative_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write below `root` and return the full path.
    pub fn write_under(&self, root: &Path) -> io::Result<PathBuf> {
        let full = root.join(&self.relative_path);
        write_file(&full, &self.content)?;
        Ok(full)
    }
}
