use hookgen_codegen::{Generator, PreviewFile, Rendered, generation::ExportLedger};
use hookgen_ir::TableDescriptor;

use super::{EXTENSION, INDEX_FILE};
use crate::{
    Settings,
    files::{IndexTs, TablesTs},
};

const TABLES_STEM: &str = "tables";

/// Generates document and id aliases for the schema tables.
pub struct TypesGenerator<'a> {
    tables: &'a [TableDescriptor],
    settings: &'a Settings,
}

impl<'a> TypesGenerator<'a> {
    pub fn new(tables: &'a [TableDescriptor], settings: &'a Settings) -> Self {
        Self { tables, settings }
    }
}

impl Generator for TypesGenerator<'_> {
    fn name(&self) -> &'static str {
        "types"
    }

    fn file_extension(&self) -> &'static str {
        EXTENSION
    }

    fn render(&self) -> Rendered {
        // Two tables whose names differ only in separators share a type name.
        let mut ledger = ExportLedger::new();
        for table in self.tables {
            ledger.record(TABLES_STEM, &table.type_name);
            ledger.record(TABLES_STEM, &format!("{}Id", table.type_name));
        }

        let tables = TablesTs::new(self.tables, &self.settings.data_model_import).render();
        let index = IndexTs::new().file(TABLES_STEM).render();

        Rendered {
            files: vec![
                PreviewFile::new(format!("{TABLES_STEM}.{EXTENSION}"), tables),
                PreviewFile::new(INDEX_FILE, index),
            ],
            warnings: ledger.into_warnings(),
        }
    }
}
