//! Duplicate export detection.

use indexmap::IndexMap;

/// Exported names of one barrel and the file that first exported each.
#[derive(Debug, Clone, Default)]
pub struct ExportLedger {
    owners: IndexMap<String, String>,
    warnings: Vec<String>,
}

impl ExportLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `file` exports `name`.
    ///
    /// A name already exported by another file yields a warning; the barrel
    /// would make it ambiguous.
    pub fn record(&mut self, file: &str, name: &str) {
        match self.owners.get(name) {
            Some(owner) if owner != file => self.warnings.push(format!(
                "`{name}` is exported by both {owner} and {file}"
            )),
            Some(_) => self
                .warnings
                .push(format!("`{name}` is exported twice by {file}")),
            None => {
                self.owners.insert(name.to_string(), file.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
