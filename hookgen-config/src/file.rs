use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// A hookgen.toml file with both raw content and resolved config.
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl ConfigFile {
    /// Open, parse and resolve a config file.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let config = Config::from_str_with_filename(&content, &filename, &base_dir)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the resolved config.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hookgen.toml");
        fs::write(&path, "[source]\nroot = \"backend\"\n").unwrap();

        let file = ConfigFile::open(&path).unwrap();

        assert_eq!(file.config().root, temp.path().join("backend"));
        assert!(file.content().contains("backend"));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("missing.toml")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
