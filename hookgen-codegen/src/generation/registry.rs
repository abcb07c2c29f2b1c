//! Full-overwrite writing of generated files.
//!
//! Every generator owns its output directory (and any sub-directories it
//! declares): existing generated files are removed before the new set is
//! written, so stale output never lingers.

use std::path::{Component, Path};

use eyre::Result;
use hookgen_core::{clean_generated, write_file};
use tracing::debug;

use crate::language::PreviewFile;

/// Registry for collecting and writing one generator's files.
#[derive(Debug)]
pub struct FileRegistry {
    extension: String,
    owned_dirs: Vec<String>,
    entries: Vec<PreviewFile>,
}

/// Outcome of [`FileRegistry::write_all`].
#[derive(Debug, Default, PartialEq)]
pub struct WriteStats {
    /// Written files, in registration order.
    pub written: Vec<String>,
    /// Removed files that were not written again.
    pub removed: Vec<String>,
}

impl FileRegistry {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            owned_dirs: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Declare sub-directories that are cleaned along with the root.
    pub fn own_dirs<'a>(&mut self, dirs: impl IntoIterator<Item = &'a str>) {
        self.owned_dirs.extend(dirs.into_iter().map(str::to_string));
    }

    pub fn register_all(&mut self, entries: impl IntoIterator<Item = PreviewFile>) {
        self.entries.extend(entries);
    }

    /// Clean the output directory and owned sub-directories, then write
    /// every registered file.
    pub fn write_all(&self, base: &Path) -> Result<WriteStats> {
        let mut removed = clean_generated(base, &self.extension)?;
        for dir in &self.owned_dirs {
            removed.extend(clean_generated(&base.join(dir), &self.extension)?);
        }

        let mut stats = WriteStats::default();
        for entry in &self.entries {
            write_file(&base.join(&entry.path), &entry.content)?;
            stats.written.push(entry.path.clone());
        }

        stats.removed = removed
            .iter()
            .map(|path| relative(base, path))
            .filter(|path| !stats.written.contains(path))
            .collect();

        debug!(
            dir = %base.display(),
            written = stats.written.len(),
            removed = stats.removed.len(),
            "wrote generated files"
        );
        Ok(stats)
    }
}

/// `/`-separated path of `path` relative to `base`.
fn relative(base: &Path, path: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
