//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report, plural};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of exported public functions found.
    pub function_count: usize,

    /// Number of schema tables found.
    pub table_count: usize,

    /// Number of source files skipped because they failed to parse.
    pub failed_files: usize,

    /// Analysis diagnostics and generator warnings.
    pub warnings: Vec<String>,

    /// One entry per generator that ran.
    pub outputs: Vec<TargetOutput>,
}

/// Output of one generator.
#[derive(Debug)]
pub struct TargetOutput {
    /// Generator name (e.g., "hooks").
    pub name: &'static str,
    pub output_dir: PathBuf,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Stale files removed.
    pub removed: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "Found {} and {}",
            plural(self.function_count, "function"),
            plural(self.table_count, "table")
        ));
        if self.failed_files > 0 {
            out.preformatted(&format!(
                "Skipped {} that failed to parse",
                plural(self.failed_files, "file")
            ));
        }

        for output in &self.outputs {
            out.newline();
            match &output.result {
                GenerationResult::Written(written) => render_written(out, output, written),
                GenerationResult::Preview(preview) => render_preview(out, output, preview),
            }
        }
    }
}

fn render_written(out: &mut dyn Output, output: &TargetOutput, written: &WrittenResult) {
    out.key_value(
        &format!("Generated {}", output.name),
        &format!(
            "{} ({})",
            output.output_dir.display(),
            plural(written.written.len(), "file")
        ),
    );
    for removed in &written.removed {
        out.removed_item(removed);
    }
}

fn render_preview(out: &mut dyn Output, output: &TargetOutput, preview: &PreviewResult) {
    for file in &preview.files {
        out.divider(&output.output_dir.join(&file.path).display().to_string());
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.preformatted(&format!(
        "{} would be generated by {}",
        plural(preview.files.len(), "file"),
        output.name
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::Recorded;

    #[test]
    fn test_written_report_lists_removed_files() {
        let report = GenerateReport {
            function_count: 1,
            table_count: 0,
            failed_files: 1,
            warnings: vec!["error[functions]: unexpected end of input (at convex/x.ts:1)".into()],
            outputs: vec![TargetOutput {
                name: "hooks",
                output_dir: PathBuf::from("src/hooks"),
                result: GenerationResult::Written(WrittenResult {
                    written: vec!["queries/a.ts".into(), "index.ts".into()],
                    removed: vec!["queries/b.ts".into()],
                }),
            }],
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            vec![
                "warning: error[functions]: unexpected end of input (at convex/x.ts:1)",
                "",
                "Found 1 function and 0 tables",
                "Skipped 1 file that failed to parse",
                "",
                "Generated hooks: src/hooks (2 files)",
                "  - queries/b.ts",
            ]
        );
    }
}
