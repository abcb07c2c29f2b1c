//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report, plural};

/// Report data from source analysis.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages; each one is a skipped file.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    pub source_files: usize,
    pub schema_files: usize,
    pub validators: usize,
    pub functions: usize,
    pub tables: usize,
}

impl CheckReport {
    /// Whether every file parsed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        out.section("Summary");
        out.list_item(&format!(
            "{} scanned",
            plural(self.source_files, "source file")
        ));
        out.list_item(&plural(self.schema_files, "schema file"));
        out.list_item(&plural(self.validators, "validator"));
        out.list_item(&plural(self.functions, "function"));
        out.list_item(&plural(self.tables, "table"));
        out.newline();

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            out.preformatted(&format!(
                "✗ {} failed to parse",
                plural(self.errors.len(), "file")
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::Recorded;

    #[test]
    fn test_invalid_report() {
        let report = CheckReport {
            config_path: PathBuf::from("hookgen.toml"),
            errors: vec!["unexpected end of input\n  --> convex/x.ts:1".into()],
            warnings: Vec::new(),
            infos: Vec::new(),
            source_files: 2,
            schema_files: 1,
            validators: 0,
            functions: 1,
            tables: 3,
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.0[0], "error: unexpected end of input\n  --> convex/x.ts:1");
        assert!(out.0.contains(&"  2 source files scanned".to_string()));
        assert!(out.0.contains(&"  0 validators".to_string()));
        assert_eq!(out.0.last().unwrap(), "✗ 1 file failed to parse");
    }
}
