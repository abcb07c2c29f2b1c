use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Remove every file with the given extension directly inside `dir`.
///
/// Sub-directories are left alone. A missing directory is created so the
/// caller can write into it right after cleaning. Returns the removed paths
/// in sorted order.
pub fn clean_generated(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;

    let mut removed = Vec::new();
    let entries =
        std::fs::read_dir(dir).wrap_err_with(|| format!("failed to read {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            std::fs::remove_file(&path)
                .wrap_err_with(|| format!("failed to remove {}", path.display()))?;
            removed.push(path);
        }
    }

    removed.sort();
    Ok(removed)
}
