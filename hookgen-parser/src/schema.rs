//! Table extraction from schema files.

use std::collections::HashSet;

use hookgen_core::to_pascal_case;
use hookgen_ir::{SchemaFile, TableDescriptor};
use tracing::{debug, warn};

use crate::{
    SyntaxError,
    diagnostic::{Diagnostic, Phase},
    scanner::{read, scan_schema_dir, schema_dir_of},
    syntax::{Expr, Module, Property, parse_module},
};

/// Spread count above which a main schema is treated as assembled from
/// per-domain files.
const SPREAD_FALLBACK_THRESHOLD: usize = 5;

/// Tables found in the schema, deduplicated by name (first occurrence wins).
pub fn parse_schema(files: &[SchemaFile]) -> (Vec<TableDescriptor>, Vec<Diagnostic>) {
    let mut tables = Tables::default();
    let mut diagnostics = Vec::new();

    for file in files {
        let module = match read(&file.path)
            .map_err(|e| (e.to_string(), None))
            .and_then(|src| parse_module(&src).map_err(|e| (e.message.clone(), Some(e.line))))
        {
            Ok(module) => module,
            Err((message, line)) => {
                warn!(path = %file.path.display(), %message, "skipping schema file");
                diagnostics
                    .push(Diagnostic::error(Phase::Schema, message).in_file(&file.path, line));
                continue;
            }
        };

        if file.is_main() {
            parse_main(file, &module, &mut tables, &mut diagnostics);
        } else {
            tables.extend(table_names(&module), &file.domain);
        }
    }

    (tables.into_vec(), diagnostics)
}

/// Extract tables from source text; for tests and single-file use.
pub fn extract_tables(src: &str, file: &SchemaFile) -> Result<Vec<TableDescriptor>, SyntaxError> {
    let module = parse_module(src)?;
    let mut tables = Tables::default();
    if file.is_main() {
        if let Some(entries) = schema_entries(&module) {
            tables.extend(entries.direct, &file.domain);
        }
    } else {
        tables.extend(table_names(&module), &file.domain);
    }
    Ok(tables.into_vec())
}

fn parse_main(
    file: &SchemaFile,
    module: &Module,
    tables: &mut Tables,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(entries) = schema_entries(module) else {
        diagnostics.push(
            Diagnostic::warning(Phase::Schema, "no defineSchema({...}) call found")
                .in_file(&file.path, None),
        );
        return;
    };

    if entries.spreads > SPREAD_FALLBACK_THRESHOLD && entries.spreads > entries.direct.len() {
        let dir = schema_dir_of(&file.path);
        debug!(
            spreads = entries.spreads,
            direct = entries.direct.len(),
            dir = %dir.display(),
            "schema is assembled from spreads, extracting per file"
        );
        let fallback = per_file_tables(&dir, diagnostics);
        if !fallback.is_empty() {
            for (names, domain) in fallback {
                tables.extend(names, &domain);
            }
            return;
        }
    }

    tables.extend(entries.direct, &file.domain);
}

fn per_file_tables(
    dir: &std::path::Path,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<(Vec<String>, String)> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let files = match scan_schema_dir(dir) {
        Ok((files, skipped)) => {
            diagnostics.extend(skipped);
            files
        }
        Err(e) => {
            diagnostics.push(Diagnostic::warning(Phase::Schema, e.to_string()));
            return Vec::new();
        }
    };

    let mut found = Vec::new();
    for file in files {
        match read(&file.path).map(|src| parse_module(&src)) {
            Ok(Ok(module)) => {
                let names = table_names(&module);
                if !names.is_empty() {
                    found.push((names, file.domain));
                }
            }
            Ok(Err(e)) => diagnostics.push(
                Diagnostic::error(Phase::Schema, e.message).in_file(&file.path, Some(e.line)),
            ),
            Err(e) => {
                diagnostics.push(Diagnostic::error(Phase::Schema, e.to_string()).in_file(&file.path, None))
            }
        }
    }
    found
}

struct SchemaEntries {
    direct: Vec<String>,
    spreads: usize,
}

/// Direct and shorthand entries of the first `defineSchema({...})` call.
fn schema_entries(module: &Module) -> Option<SchemaEntries> {
    let mut props = None;
    for decl in &module.declarations {
        decl.init.walk(&mut |expr| {
            if props.is_none()
                && let Some(("defineSchema", [arg, ..])) = expr.as_ident_call()
            {
                props = arg.as_object();
            }
        });
        if props.is_some() {
            break;
        }
    }

    let props = props?;
    let mut entries = SchemaEntries {
        direct: Vec::new(),
        spreads: 0,
    };
    for prop in props {
        match prop {
            Property::KeyValue { key, .. } => entries.direct.push(key.clone()),
            Property::Shorthand(name) => entries.direct.push(name.clone()),
            Property::Spread(_) => entries.spreads += 1,
            Property::Other(_) => {}
        }
    }
    Some(entries)
}

/// Tables declared in a per-domain file, in source order.
///
/// Recognises `name: defineTable(...)` properties anywhere in a declaration
/// and top-level `const nameTable = defineTable(...)` bindings.
fn table_names(module: &Module) -> Vec<String> {
    let mut names = Vec::new();
    for decl in &module.declarations {
        if is_define_table(&decl.init) {
            let name = decl
                .name
                .strip_suffix("Table")
                .filter(|s| !s.is_empty())
                .unwrap_or(&decl.name);
            names.push(name.to_string());
            continue;
        }
        decl.init.walk(&mut |expr| {
            if let Expr::Object(props) = expr {
                for prop in props {
                    if let Property::KeyValue { key, value } = prop
                        && is_define_table(value)
                    {
                        names.push(key.clone());
                    }
                }
            }
        });
    }
    names
}

fn is_define_table(expr: &Expr) -> bool {
    matches!(expr.chain_base().as_ident_call(), Some(("defineTable", _)))
}

#[derive(Default)]
struct Tables {
    seen: HashSet<String>,
    tables: Vec<TableDescriptor>,
}

impl Tables {
    fn extend(&mut self, names: Vec<String>, domain: &str) {
        for name in names {
            if self.seen.insert(name.clone()) {
                self.tables.push(TableDescriptor {
                    type_name: to_pascal_case(&name),
                    name,
                    domain: domain.to_string(),
                });
            }
        }
    }

    fn into_vec(self) -> Vec<TableDescriptor> {
        self.tables
    }
}
