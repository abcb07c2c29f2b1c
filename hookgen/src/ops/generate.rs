//! Generate operation - analysis followed by the selected generators.

use std::path::Path;

use clap::ValueEnum;
use eyre::{Context, Result};
use hookgen_codegen_typescript::{
    ApiGenerator, Generator, HooksGenerator, Settings, TypesGenerator,
};
use hookgen_config::Config;
use hookgen_parser::{Analysis, analyze};
use tracing::debug;

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, TargetOutput, WrittenResult,
};

/// One output class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Hooks,
    Api,
    Types,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Hooks, Target::Api, Target::Types];

    fn output_dir(self, config: &Config) -> &Path {
        match self {
            Target::Hooks => &config.hooks_dir,
            Target::Api => &config.api_dir,
            Target::Types => &config.types_dir,
        }
    }

    fn generator<'a>(
        self,
        analysis: &'a Analysis,
        settings: &'a Settings,
    ) -> Box<dyn Generator + 'a> {
        match self {
            Target::Hooks => Box::new(HooksGenerator::new(&analysis.functions, settings)),
            Target::Api => Box::new(ApiGenerator::new(&analysis.functions, settings)),
            Target::Types => Box::new(TypesGenerator::new(&analysis.tables, settings)),
        }
    }
}

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Run a single generator instead of all three.
    pub only: Option<Target>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Analyses the sources once and runs every selected generator on the result.
/// Per-file analysis failures do not stop generation; they are reported as
/// warnings.
pub fn generate(config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let analysis = analyze(config).wrap_err("Failed to scan sources")?;
    let settings = super::settings(config);

    let targets = match opts.only {
        Some(target) => vec![target],
        None => Target::ALL.to_vec(),
    };

    let mut warnings: Vec<String> = analysis.diagnostics.iter().map(|d| d.to_string()).collect();
    let mut outputs = Vec::new();

    for target in targets {
        let generator = target.generator(&analysis, &settings);
        let output_dir = target.output_dir(config);
        debug!(
            generator = generator.name(),
            dir = %output_dir.display(),
            dry_run = opts.dry_run,
            "running generator"
        );

        let result = if opts.dry_run {
            let rendered = generator.render();
            warnings.extend(rendered.warnings);
            GenerationResult::Preview(PreviewResult {
                files: rendered
                    .files
                    .into_iter()
                    .map(|f| PreviewFile {
                        path: f.path,
                        content: f.content,
                    })
                    .collect(),
            })
        } else {
            let result = generator
                .generate(output_dir)
                .wrap_err_with(|| format!("Failed to generate {}", generator.name()))?;
            warnings.extend(result.warnings);
            GenerationResult::Written(WrittenResult {
                written: result.written,
                removed: result.removed,
            })
        };

        outputs.push(TargetOutput {
            name: generator.name(),
            output_dir: output_dir.to_path_buf(),
            result,
        });
    }

    Ok(GenerateReport {
        function_count: analysis.functions.len(),
        table_count: analysis.tables.len(),
        failed_files: analysis.failed_files(),
        warnings,
        outputs,
    })
}
