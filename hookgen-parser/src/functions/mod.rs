//! Extraction of registered functions from source files.
//!
//! Two declaration styles are supported and selected once per run:
//!
//! - [`DeclarationStyle::Standard`]: `export const list = query({ args, handler })`
//! - [`DeclarationStyle::Fluent`]: `export const list = authedQuery.input({...}).handler(...).public()`

mod fluent;
mod standard;

use hookgen_ir::{DeclarationStyle, FunctionDescriptor, FunctionKind, SourceFile};
use tracing::{debug, warn};

use crate::{
    SyntaxError,
    classify::ArgsShape,
    diagnostic::{Diagnostic, Phase},
    scanner::read,
    syntax::{Module, parse_module},
    validators::ValidatorTable,
};

/// A registration found in one module, before it is tied to a source file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Registration {
    pub name: String,
    pub kind: FunctionKind,
    pub shape: ArgsShape,
}

/// Read and parse every source file, skipping (and reporting) files that fail.
pub fn parse_functions(
    files: &[SourceFile],
    style: DeclarationStyle,
    validators: &ValidatorTable,
) -> (Vec<FunctionDescriptor>, Vec<Diagnostic>) {
    let mut functions = Vec::new();
    let mut diagnostics = Vec::new();

    for file in files {
        let src = match read(&file.path) {
            Ok(src) => src,
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "skipping unreadable file");
                diagnostics
                    .push(Diagnostic::error(Phase::Functions, e.to_string()).in_file(&file.path, None));
                continue;
            }
        };

        match extract_functions(&src, file, style, validators) {
            Ok(found) => {
                debug!(path = %file.path.display(), count = found.len(), "parsed functions");
                functions.extend(found);
            }
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "skipping file that failed to parse");
                diagnostics.push(
                    Diagnostic::error(Phase::Functions, e.message.clone())
                        .in_file(&file.path, Some(e.line)),
                );
            }
        }
    }

    (functions, diagnostics)
}

/// Extract the functions registered in one file's source text.
pub fn extract_functions(
    src: &str,
    file: &SourceFile,
    style: DeclarationStyle,
    validators: &ValidatorTable,
) -> Result<Vec<FunctionDescriptor>, SyntaxError> {
    let module = parse_module(src)?;
    if module.reexports > 0 {
        debug!(
            path = %file.path.display(),
            count = module.reexports,
            "ignoring re-exports"
        );
    }

    let registrations = registrations(&module, style, validators);
    Ok(registrations
        .into_iter()
        .map(|r| describe(r, file))
        .collect())
}

fn registrations(
    module: &Module,
    style: DeclarationStyle,
    validators: &ValidatorTable,
) -> Vec<Registration> {
    match style {
        DeclarationStyle::Standard => standard::registrations(module, validators),
        DeclarationStyle::Fluent => fluent::registrations(module, validators),
    }
}

fn describe(registration: Registration, file: &SourceFile) -> FunctionDescriptor {
    let mut function = FunctionDescriptor::new(
        registration.name,
        registration.kind,
        file.namespace.clone(),
        &file.path,
    );
    function.arguments = registration.shape.arguments;
    function.is_paginated = registration.shape.is_paginated;
    if registration.shape.opaque {
        function.mark_opaque();
    }
    function
}
