//! `tables.ts`: document, id and name types for every table.

use hookgen_codegen::Renderable;
use hookgen_core::singularize;
use hookgen_ir::TableDescriptor;

use crate::{
    ast::{Import, TypeAlias, string_literal, union},
    code_file::{CodeFile, RawCode},
};

pub struct TablesTs<'a> {
    tables: Vec<&'a TableDescriptor>,
    data_model_import: &'a str,
}

impl<'a> TablesTs<'a> {
    /// Tables are emitted sorted by name.
    pub fn new(tables: impl IntoIterator<Item = &'a TableDescriptor>, data_model_import: &'a str) -> Self {
        let mut tables: Vec<_> = tables.into_iter().collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            tables,
            data_model_import,
        }
    }

    pub fn render(&self) -> String {
        let mut file = CodeFile::new();
        if !self.tables.is_empty() {
            file = file.import(
                Import::new(self.data_model_import)
                    .named("Doc")
                    .named("Id")
                    .type_only(),
            );
        }

        for table in &self.tables {
            let literal = string_literal(&table.name);
            let mut fragments =
                TypeAlias::new(&table.type_name, format!("Doc<{literal}>")).to_fragments();
            fragments.extend(
                TypeAlias::new(format!("{}Id", table.type_name), format!("Id<{literal}>"))
                    .to_fragments(),
            );
            file = file.add(fragments);
        }

        let table_names = union(self.tables.iter().map(|t| string_literal(&t.name)));
        let mut entities: Vec<String> = Vec::new();
        for table in &self.tables {
            let entity = string_literal(&singularize(&table.name));
            if !entities.contains(&entity) {
                entities.push(entity);
            }
        }

        file.add(TypeAlias::new("TableName", table_names))
            .add(TypeAlias::new("EntityName", union(entities)))
            .add(self.summary())
            .render()
    }

    fn summary(&self) -> RawCode {
        let mut lines = vec![format!("// Tables ({}):", self.tables.len())];
        lines.extend(
            self.tables
                .iter()
                .map(|t| format!("//   {} -> {} ({})", t.name, t.type_name, t.domain)),
        );
        RawCode::lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, type_name: &str, domain: &str) -> TableDescriptor {
        TableDescriptor {
            name: name.to_string(),
            type_name: type_name.to_string(),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn test_tables_file() {
        let tables = [
            table("users", "Users", "main"),
            table("categories", "Categories", "catalog"),
        ];

        insta::assert_snapshot!(TablesTs::new(&tables, "@/convex/_generated/dataModel").render(), @r#"
        // This file is generated by hookgen. Do not edit it by hand.

        import type { Doc, Id } from "@/convex/_generated/dataModel";

        export type Categories = Doc<"categories">;
        export type CategoriesId = Id<"categories">;

        export type Users = Doc<"users">;
        export type UsersId = Id<"users">;

        export type TableName = "categories" | "users";

        export type EntityName = "category" | "user";

        // Tables (2):
        //   categories -> Categories (catalog)
        //   users -> Users (main)
        "#);
    }

    #[test]
    fn test_no_tables() {
        let none: Vec<TableDescriptor> = Vec::new();
        let code = TablesTs::new(&none, "dm").render();

        assert!(!code.contains("import"));
        assert!(code.contains("export type TableName = never;"));
        assert!(code.contains("export type EntityName = never;"));
    }
}
