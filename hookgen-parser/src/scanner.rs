//! Discovery of function-source and schema files.

use std::path::{Path, PathBuf};

use hookgen_ir::{MAIN_DOMAIN, Namespace, ROOT_DOMAIN, SchemaFile, SourceFile};
use regex::Regex;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{
    ScanError,
    diagnostic::{Diagnostic, Phase},
};

/// Base names of backend infrastructure files that never hold endpoints.
const INFRASTRUCTURE_FILES: &[&str] = &["config", "crons", "http", "schema", "migrations", "index"];

/// Directory names always pruned from the function scan.
const SCHEMA_DIRS: &[&str] = &["schema", "schemas"];

/// Suffixes stripped from schema file names to derive a domain.
const DOMAIN_SUFFIXES: &[&str] = &[".schema", "Schema", "Tables", "_schema", "-schema"];

const SCHEMA_MARKER: &str = "defineSchema(";

/// Find every function-source file below `root`, sorted by path.
///
/// Entries below `root` that cannot be read are skipped and reported.
pub fn scan(
    root: &Path,
    skip_dirs: &[String],
    skip_patterns: &[Regex],
) -> Result<(Vec<SourceFile>, Vec<Diagnostic>), ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned_dir(entry, skip_dirs));

    let mut files = Vec::new();
    let mut diagnostics = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                diagnostics.push(below_root(root, error)?);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(base_name) = source_base_name(entry.path(), skip_patterns) else {
            continue;
        };
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let namespace = namespace_for(relative, base_name);
        debug!(path = %entry.path().display(), %namespace, "found source file");

        files.push(SourceFile {
            path: entry.path().to_path_buf(),
            namespace,
            base_name: base_name.to_string(),
        });
    }
    Ok((files, diagnostics))
}

/// A walk error as a per-entry warning. Failing to read `root` itself is fatal.
fn below_root(root: &Path, error: walkdir::Error) -> Result<Diagnostic, ScanError> {
    if error.depth() == 0 {
        return Err(ScanError::Walk {
            path: root.to_path_buf(),
            source: error,
        });
    }
    Ok(skipped_entry(Phase::Scan, &error))
}

pub(crate) fn skipped_entry(phase: Phase, error: &walkdir::Error) -> Diagnostic {
    let message = match error.io_error() {
        Some(io) => format!("skipped unreadable entry: {io}"),
        None => format!("skipped entry: {error}"),
    };
    let diagnostic = Diagnostic::warning(phase, message);
    match error.path() {
        Some(path) => diagnostic.in_file(path, None),
        None => diagnostic,
    }
}

fn is_pruned_dir(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    SCHEMA_DIRS.contains(&name.as_ref()) || skip_dirs.iter().any(|d| *d == name)
}

/// The base name of a file that should be scanned, or `None` if it is excluded.
fn source_base_name<'a>(path: &'a Path, skip_patterns: &[Regex]) -> Option<&'a str> {
    let file_name = path.file_name()?.to_str()?;
    if !file_name.ends_with(".ts") || file_name.ends_with(".d.ts") {
        return None;
    }
    if skip_patterns.iter().any(|p| p.is_match(file_name)) {
        return None;
    }
    let base_name = file_name.strip_suffix(".ts")?;
    if INFRASTRUCTURE_FILES.contains(&base_name) {
        return None;
    }
    Some(base_name)
}

/// Relative directory segments followed by the base name.
fn namespace_for(relative: &Path, base_name: &str) -> Namespace {
    let dirs = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|c| c.as_os_str().to_str());
    Namespace::from_segments(dirs.chain(std::iter::once(base_name)))
}

/// Resolve the configured schema path into the files that declare tables.
///
/// `schema_path` may be given with or without the `.ts` extension.
pub fn scan_schema(schema_path: &Path) -> Result<(Vec<SchemaFile>, Vec<Diagnostic>), ScanError> {
    let stem = schema_path
        .to_str()
        .and_then(|s| s.strip_suffix(".ts"))
        .map(PathBuf::from)
        .unwrap_or_else(|| schema_path.to_path_buf());

    for candidate in [with_ts_extension(&stem), stem.join("index.ts")] {
        if candidate.is_file() && read(&candidate)?.contains(SCHEMA_MARKER) {
            debug!(path = %candidate.display(), "found main schema file");
            let main = SchemaFile {
                path: candidate,
                domain: MAIN_DOMAIN.to_string(),
            };
            return Ok((vec![main], Vec::new()));
        }
    }

    if stem.is_dir() {
        return scan_schema_dir(&stem);
    }
    for single in [with_ts_extension(&stem), schema_path.to_path_buf()] {
        if single.is_file() {
            let file = SchemaFile {
                path: single,
                domain: ROOT_DOMAIN.to_string(),
            };
            return Ok((vec![file], Vec::new()));
        }
    }
    Ok((Vec::new(), Vec::new()))
}

fn with_ts_extension(stem: &Path) -> PathBuf {
    let mut path = stem.as_os_str().to_owned();
    path.push(".ts");
    PathBuf::from(path)
}

/// Every `.ts` file below a schema directory, except index files.
pub fn scan_schema_dir(dir: &Path) -> Result<(Vec<SchemaFile>, Vec<Diagnostic>), ScanError> {
    let mut files = Vec::new();
    let mut diagnostics = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                diagnostics.push(below_root(dir, error)?);
                continue;
            }
        };
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !entry.file_type().is_file()
            || !file_name.ends_with(".ts")
            || file_name.ends_with(".d.ts")
            || file_name == "index.ts"
        {
            continue;
        }
        files.push(SchemaFile {
            path: path.to_path_buf(),
            domain: schema_domain(dir, path),
        });
    }
    Ok((files, diagnostics))
}

/// Containing sub-directory, else the file name without schema suffixes.
fn schema_domain(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path);
    if relative.components().count() > 1
        && let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
    {
        return parent.to_string();
    }

    let stem = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_suffix(".ts"))
        .unwrap_or_default();
    DOMAIN_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix).filter(|s| !s.is_empty()))
        .unwrap_or(stem)
        .to_string()
}

pub(crate) fn read(path: &Path) -> Result<String, ScanError> {
    std::fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Directory holding per-domain schema files next to a main schema file.
///
/// `convex/schema.ts` → `convex/schema`, `convex/schema/index.ts` → `convex/schema`.
pub(crate) fn schema_dir_of(main: &Path) -> PathBuf {
    match main.file_name().and_then(|n| n.to_str()) {
        Some("index.ts") => main.parent().map(Path::to_path_buf).unwrap_or_default(),
        _ => main.with_extension(""),
    }
}
