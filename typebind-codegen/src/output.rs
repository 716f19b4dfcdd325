//! Output directory state handling.

use std::{fs, path::Path};

use tracing::info;
use typebind_schema::Overwrite;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Apply the overwrite policy to `dir` before anything is written.
///
/// A missing or empty directory is always fine. Otherwise `None` fails,
/// `Full` deletes the contents (the directory itself stays) and `Merge`
/// leaves everything in place.
pub fn prepare_output(dir: &Path, policy: Overwrite) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    if entries.next().is_none() {
        return Ok(());
    }

    match policy {
        Overwrite::None => Err(Error::OutputStateConflict {
            path: dir.to_path_buf(),
        }),
        Overwrite::Full => {
            info!(dir = %dir.display(), "deleting current contents");
            clear_dir(dir)
        }
        Overwrite::Merge => Ok(()),
    }
}

/// Delete everything under `dir`, deepest entries first.
fn clear_dir(dir: &Path) -> Result<()> {
    for entry in WalkDir::new(dir).min_depth(1).contents_first(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            Error::io(path, e.into())
        })?;
        let path = entry.path();
        let removed = if entry.file_type().is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };
        removed.map_err(|e| Error::io(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn populated() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("vcloud/api")).unwrap();
        fs::write(temp.path().join("vcloud/api/Old.ts"), "old").unwrap();
        fs::write(temp.path().join("keep.txt"), "keep").unwrap();
        temp
    }

    #[test]
    fn test_missing_dir_is_fine() {
        let temp = TempDir::new().unwrap();
        prepare_output(&temp.path().join("absent"), Overwrite::None).unwrap();
    }

    #[test]
    fn test_empty_dir_is_fine() {
        let temp = TempDir::new().unwrap();
        prepare_output(temp.path(), Overwrite::None).unwrap();
    }

    #[test]
    fn test_none_rejects_non_empty_dir() {
        let temp = populated();
        let err = prepare_output(temp.path(), Overwrite::None).unwrap_err();

        assert!(matches!(err, Error::OutputStateConflict { .. }));
        assert!(temp.path().join("keep.txt").exists());
    }

    #[test]
    fn test_full_clears_contents_but_keeps_root() {
        let temp = populated();
        prepare_output(temp.path(), Overwrite::Full).unwrap();

        assert!(temp.path().exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_merge_keeps_contents() {
        let temp = populated();
        prepare_output(temp.path(), Overwrite::Merge).unwrap();

        assert!(temp.path().join("keep.txt").exists());
        assert!(temp.path().join("vcloud/api/Old.ts").exists());
    }
}
