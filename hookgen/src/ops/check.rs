//! Check operation - analysis without generation.

use std::path::Path;

use eyre::{Context, Result};
use hookgen_config::Config;
use hookgen_parser::{Severity, analyze};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Scans and parses the sources and returns their diagnostics.
pub fn check(config: &Config, config_path: &Path) -> Result<CheckReport> {
    let analysis = analyze(config).wrap_err("Failed to scan sources")?;

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &analysis.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        errors,
        warnings,
        infos,
        source_files: analysis.files.len(),
        schema_files: analysis.schema_files.len(),
        validators: analysis.validators.len(),
        functions: analysis.functions.len(),
        tables: analysis.tables.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_unparsable_file_fails_check() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("convex")).unwrap();
        fs::write(
            temp.path().join("convex/ok.ts"),
            "export const ping = query({ args: {} });",
        )
        .unwrap();
        fs::write(temp.path().join("convex/broken.ts"), "export const x = query({ ").unwrap();
        let config = Config::from_str_with_filename("", "hookgen.toml", temp.path()).unwrap();

        let report = check(&config, Path::new("hookgen.toml")).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("broken.ts"));
        assert_eq!(report.source_files, 2);
        assert_eq!(report.functions, 1);
    }
}
