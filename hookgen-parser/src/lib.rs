//! Static analysis of a backend source tree.
//!
//! Nothing is executed or type-checked. Source files are parsed with the
//! tree-sitter TypeScript grammar, their top-level declarations converted into
//! a small expression tree, and the registrations, validators and schema
//! tables recognised structurally.
//!
//! # Example
//!
//! ```ignore
//! use hookgen_config::Config;
//! use hookgen_parser::analyze;
//!
//! let analysis = analyze(&Config::default())?;
//! for function in &analysis.functions {
//!     println!("{} {}", function.namespace, function.name);
//! }
//! ```

mod classify;
mod diagnostic;
mod error;
mod functions;
mod scanner;
mod schema;
mod syntax;
mod validators;

pub use classify::{ArgsShape, PAGINATION_ARG, classify_args_block, classify_value};
pub use diagnostic::{Diagnostic, Phase, Severity};
pub use error::{ScanError, SyntaxError};
pub use functions::{extract_functions, parse_functions};
pub use scanner::{scan, scan_schema, scan_schema_dir};
pub use schema::{extract_tables, parse_schema};
pub use syntax::{Declaration, Expr, Module, Property, parse_expr, parse_module};
pub use validators::{ValidatorDef, ValidatorTable};

use hookgen_config::Config;
use hookgen_ir::{FunctionDescriptor, SchemaFile, SourceFile, TableDescriptor};
use tracing::info;

/// Everything read from the source tree in one run.
#[derive(Debug)]
pub struct Analysis {
    pub files: Vec<SourceFile>,
    pub schema_files: Vec<SchemaFile>,
    pub validators: ValidatorTable,
    pub functions: Vec<FunctionDescriptor>,
    pub tables: Vec<TableDescriptor>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Number of files skipped because they could not be read or parsed.
    pub fn failed_files(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }
}

/// Scan and parse the sources described by `config`.
///
/// Only a missing or unreadable source root is fatal; problems with single
/// files and directories below it are collected in [`Analysis::diagnostics`].
pub fn analyze(config: &Config) -> Result<Analysis, ScanError> {
    let (files, mut diagnostics) = scan(&config.root, &config.skip_dirs, &config.skip_patterns)?;
    let (validators, validator_diagnostics) = ValidatorTable::build(&config.root);
    diagnostics.extend(validator_diagnostics);
    let (functions, function_diagnostics) =
        parse_functions(&files, config.convention, &validators);
    diagnostics.extend(function_diagnostics);

    let (schema_files, scan_diagnostics) = scan_schema(&config.schema)?;
    diagnostics.extend(scan_diagnostics);
    let (tables, schema_diagnostics) = parse_schema(&schema_files);
    diagnostics.extend(schema_diagnostics);

    info!(
        files = files.len(),
        validators = validators.len(),
        functions = functions.len(),
        tables = tables.len(),
        "analysis complete"
    );

    Ok(Analysis {
        files,
        schema_files,
        validators,
        functions,
        tables,
        diagnostics,
    })
}
