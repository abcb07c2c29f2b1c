//! Symbol table of shared argument validators.
//!
//! Projects commonly keep validator objects in `model/<area>/validators.ts`
//! and reference them from registrations as `Issues.listValidator` or just
//! `listValidator`. The table maps both spellings to the parsed definition.

use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
};

use hookgen_core::to_pascal_case;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{
    SyntaxError,
    diagnostic::{Diagnostic, Phase},
    scanner::{read, skipped_entry},
    syntax::{Expr, parse_module},
};

const MODEL_DIR: &str = "model";
const VALIDATOR_SUFFIXES: &[&str] = &["validator.ts", "validators.ts"];

/// One exported validator definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorDef {
    pub name: String,
    pub expr: Expr,
    /// Source text of the definition.
    pub source: String,
    pub file: PathBuf,
    pub line: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ValidatorTable {
    entries: BTreeMap<String, ValidatorDef>,
}

impl ValidatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk every `model/` directory below `root` and register its validators.
    pub fn build(root: &Path) -> (Self, Vec<Diagnostic>) {
        let mut table = Self::new();
        let mut diagnostics = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != "node_modules");

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    diagnostics.push(skipped_entry(Phase::Validators, &error));
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_validator_file(entry.path()) {
                continue;
            }
            let Some(namespace) = model_namespace(root, entry.path()) else {
                continue;
            };

            let result = read(entry.path())
                .map_err(|e| e.to_string())
                .and_then(|src| {
                    table
                        .register(namespace.as_deref(), entry.path(), &src)
                        .map_err(|e| e.to_string())
                });
            match result {
                Ok(count) => {
                    debug!(path = %entry.path().display(), count, "registered validators");
                }
                Err(message) => {
                    warn!(path = %entry.path().display(), %message, "skipping validator file");
                    diagnostics.push(
                        Diagnostic::error(Phase::Validators, message)
                            .in_file(entry.path(), None),
                    );
                }
            }
        }

        (table, diagnostics)
    }

    /// Register every exported `const` of a validator file.
    ///
    /// Returns the number of definitions found. Earlier registrations win
    /// when two files export the same key.
    pub fn register(
        &mut self,
        namespace: Option<&str>,
        path: &Path,
        src: &str,
    ) -> Result<usize, SyntaxError> {
        let module = parse_module(src)?;
        let mut count = 0;
        for decl in module.exported().filter(|d| d.name != "default") {
            let def = ValidatorDef {
                name: decl.name.clone(),
                expr: decl.init.clone(),
                source: decl.source.clone(),
                file: path.to_path_buf(),
                line: decl.line,
            };
            if let Some(ns) = namespace {
                self.entries
                    .entry(format!("{ns}.{}", decl.name))
                    .or_insert_with(|| def.clone());
            }
            self.entries.entry(decl.name.clone()).or_insert(def);
            count += 1;
        }
        Ok(count)
    }

    /// Resolve a reference such as `Issues.listValidator`.
    ///
    /// Tries the exact key first, then the bare name after the last `.`.
    pub fn lookup(&self, reference: &str) -> Option<&ValidatorDef> {
        self.entries.get(reference).or_else(|| {
            let bare = reference.rsplit('.').next()?;
            self.entries.get(bare)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn is_validator_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| VALIDATOR_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// `Some(None)` for a file directly in `model/`, `Some(Some(ns))` for one in a
/// sub-directory, `None` when the file is not under a `model/` directory.
fn model_namespace(root: &Path, path: &Path) -> Option<Option<String>> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<&str> = relative
        .parent()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    let model = parts.iter().position(|p| *p == MODEL_DIR)?;
    Some(parts.get(model + 1).map(|first| to_pascal_case(first)))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const ISSUE_VALIDATORS: &str = r#"
import { v } from "convex/values";

export const listValidator = v.object({
  status: v.string(),
  filter: v.object({ assignee: v.optional(v.id("users")) }),
});

const internal = v.string();
"#;

    #[test]
    fn test_register_and_lookup() {
        let mut table = ValidatorTable::new();
        let count = table
            .register(Some("Issues"), Path::new("model/issues/validators.ts"), ISSUE_VALIDATORS)
            .unwrap();

        assert_eq!(count, 1);
        assert!(table.lookup("Issues.listValidator").is_some());
        assert!(table.lookup("listValidator").is_some());
        // Unknown namespace falls back to the bare name.
        assert!(table.lookup("Other.listValidator").is_some());
        assert!(table.lookup("internal").is_none());
    }

    #[test]
    fn test_nested_objects_are_captured_in_full() {
        let mut table = ValidatorTable::new();
        table
            .register(Some("Issues"), Path::new("v.ts"), ISSUE_VALIDATORS)
            .unwrap();

        let def = table.lookup("Issues.listValidator").unwrap();
        assert!(def.source.contains("assignee"));
        assert!(def.source.ends_with("})"));
    }

    #[test]
    fn test_build_walks_model_directories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("model/issues")).unwrap();
        fs::create_dir_all(root.join("model/user_profiles")).unwrap();
        fs::create_dir_all(root.join("other")).unwrap();
        fs::write(root.join("model/issues/validators.ts"), ISSUE_VALIDATORS).unwrap();
        fs::write(
            root.join("model/user_profiles/profileValidator.ts"),
            "export const profileArgs = { name: v.string() };",
        )
        .unwrap();
        fs::write(
            root.join("model/validators.ts"),
            "export const pageArgs = { cursor: v.string() };",
        )
        .unwrap();
        fs::write(
            root.join("other/validators.ts"),
            "export const ignored = v.string();",
        )
        .unwrap();

        let (table, diagnostics) = ValidatorTable::build(root);

        assert!(diagnostics.is_empty());
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(
            keys,
            vec![
                "Issues.listValidator",
                "UserProfiles.profileArgs",
                "listValidator",
                "pageArgs",
                "profileArgs"
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_build_reports_unreadable_directories() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("model/locked")).unwrap();
        fs::write(
            temp.path().join("model/validators.ts"),
            "export const pageArgs = { cursor: v.string() };",
        )
        .unwrap();
        let locked = temp.path().join("model/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let readable = fs::read_dir(&locked).is_ok();

        let (table, diagnostics) = ValidatorTable::build(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        // Privileged users can read the directory anyway.
        if readable {
            return;
        }

        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["pageArgs"]);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(diagnostics[0].phase, Phase::Validators);
    }

    #[test]
    fn test_build_reports_unparsable_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("model")).unwrap();
        fs::write(temp.path().join("model/validators.ts"), "export const x = {").unwrap();

        let (table, diagnostics) = ValidatorTable::build(temp.path());

        assert!(table.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].phase, Phase::Validators);
    }
}
