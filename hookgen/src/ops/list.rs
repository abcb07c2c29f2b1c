//! List operation - discovered functions and tables.

use eyre::{Context, Result};
use hookgen_codegen_typescript::reference_path;
use hookgen_config::Config;
use hookgen_parser::analyze;

use crate::reports::{FunctionInfo, ListReport, TableInfo};

/// Execute the list operation.
pub fn list(config: &Config) -> Result<ListReport> {
    let analysis = analyze(config).wrap_err("Failed to scan sources")?;

    let functions = analysis
        .functions
        .iter()
        .map(|f| FunctionInfo {
            kind: f.kind,
            namespace: f.namespace.to_string(),
            name: f.name.clone(),
            reference: reference_path(f),
            arguments: f
                .arguments
                .iter()
                .map(|a| {
                    if a.optional {
                        format!("{}?", a.name)
                    } else {
                        a.name.clone()
                    }
                })
                .collect(),
            paginated: f.is_paginated,
            opaque_args: f.uses_opaque_args,
        })
        .collect();

    let tables = analysis
        .tables
        .iter()
        .map(|t| TableInfo {
            name: t.name.clone(),
            type_name: t.type_name.clone(),
            domain: t.domain.clone(),
        })
        .collect();

    Ok(ListReport { functions, tables })
}
