//! Scanned files and schema tables.

use std::path::PathBuf;

use serde::Serialize;

use crate::Namespace;

/// Domain of the schema file holding the `defineSchema(...)` call.
pub const MAIN_DOMAIN: &str = "main";

/// Domain of a schema path that is a single file without `defineSchema(...)`.
pub const ROOT_DOMAIN: &str = "root";

/// A function-source file found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    pub path: PathBuf,
    pub namespace: Namespace,
    pub base_name: String,
}

/// A schema file with the domain its tables belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFile {
    pub path: PathBuf,
    pub domain: String,
}

impl SchemaFile {
    pub fn is_main(&self) -> bool {
        self.domain == MAIN_DOMAIN
    }
}

/// A table declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub name: String,
    /// PascalCase of the table name.
    pub type_name: String,
    pub domain: String,
}
