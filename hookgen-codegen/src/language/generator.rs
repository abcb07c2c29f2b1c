//! The generator trait shared by every output class.

use std::path::Path;

use eyre::{Result, WrapErr};

use crate::generation::FileRegistry;

/// A generator of one output class (hooks, API references, types).
///
/// Implementors only render; [`Generator::generate`] owns the full-overwrite
/// write cycle.
pub trait Generator {
    /// Short name of the output class (e.g., "hooks").
    fn name(&self) -> &'static str;

    /// File extension of generated files (e.g., "ts").
    fn file_extension(&self) -> &'static str;

    /// Sub-directories of the output directory whose generated files this
    /// generator also owns and cleans.
    fn owned_dirs(&self) -> &'static [&'static str] {
        &[]
    }

    /// Render every output file, including the barrel index.
    fn render(&self) -> Rendered;

    /// Preview generated files without writing to disk.
    fn preview(&self) -> Vec<PreviewFile> {
        self.render().files
    }

    /// Clean the output directory and write every rendered file into it.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let rendered = self.render();

        let mut registry = FileRegistry::new(self.file_extension());
        registry.own_dirs(self.owned_dirs().iter().copied());
        registry.register_all(rendered.files);

        let stats = registry
            .write_all(output_dir)
            .wrap_err_with(|| format!("failed to write {} output", self.name()))?;

        Ok(GenerateResult {
            written: stats.written,
            removed: stats.removed,
            warnings: rendered.warnings,
        })
    }
}

/// Output of [`Generator::render`].
#[derive(Debug, Default)]
pub struct Rendered {
    pub files: Vec<PreviewFile>,
    /// Non-fatal findings, such as one exported name produced twice.
    pub warnings: Vec<String>,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory
    pub written: Vec<String>,
    /// Stale files removed and not written again
    pub removed: Vec<String>,
    pub warnings: Vec<String>,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    /// Relative path from output directory, `/`-separated
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixed(Vec<PreviewFile>);

    impl Generator for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn file_extension(&self) -> &'static str {
            "ts"
        }

        fn owned_dirs(&self) -> &'static [&'static str] {
            &["queries"]
        }

        fn render(&self) -> Rendered {
            Rendered {
                files: self.0.clone(),
                warnings: vec!["careful".to_string()],
            }
        }
    }

    #[test]
    fn test_generate_overwrites_owned_output() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("hooks");
        fs::create_dir_all(out.join("queries")).unwrap();
        fs::write(out.join("queries/stale.ts"), "old").unwrap();
        fs::write(out.join("index.ts"), "old").unwrap();

        let generator = Fixed(vec![
            PreviewFile::new("queries/users.ts", "users"),
            PreviewFile::new("index.ts", "index"),
        ]);
        let result = generator.generate(&out).unwrap();

        assert_eq!(result.written, vec!["queries/users.ts", "index.ts"]);
        assert_eq!(result.removed, vec!["queries/stale.ts"]);
        assert_eq!(result.warnings, vec!["careful"]);
        assert!(!out.join("queries/stale.ts").exists());
        assert_eq!(fs::read_to_string(out.join("index.ts")).unwrap(), "index");
    }

    #[test]
    fn test_preview_does_not_touch_disk() {
        let generator = Fixed(vec![PreviewFile::new("index.ts", "")]);
        assert_eq!(generator.preview().len(), 1);
    }
}
