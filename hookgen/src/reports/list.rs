//! List command report data structures.

use hookgen_ir::FunctionKind;
use serde::Serialize;

use super::output::{Output, Report};

/// Discovered functions and tables.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub functions: Vec<FunctionInfo>,
    pub tables: Vec<TableInfo>,
}

#[derive(Debug, Serialize)]
pub struct FunctionInfo {
    pub kind: FunctionKind,
    pub namespace: String,
    pub name: String,
    /// Path into the `api` object.
    pub reference: String,
    /// Argument names, optional ones suffixed with `?`.
    pub arguments: Vec<String>,
    pub paginated: bool,
    pub opaque_args: bool,
}

#[derive(Debug, Serialize)]
pub struct TableInfo {
    pub name: String,
    pub type_name: String,
    pub domain: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.functions.is_empty() {
            out.preformatted("No functions found");
        } else {
            out.section(&format!("Functions ({})", self.functions.len()));
            for function in &self.functions {
                out.list_item(&function_line(function));
            }
        }

        out.newline();
        if self.tables.is_empty() {
            out.preformatted("No tables found");
        } else {
            out.section(&format!("Tables ({})", self.tables.len()));
            for table in &self.tables {
                out.list_item(&format!(
                    "{} -> {} ({})",
                    table.name, table.type_name, table.domain
                ));
            }
        }
    }
}

fn function_line(function: &FunctionInfo) -> String {
    let args = if function.opaque_args {
        "..".to_string()
    } else {
        function.arguments.join(", ")
    };
    let mut line = format!(
        "{:<8} {}({})",
        function.kind.as_str(),
        function.reference,
        args
    );
    if function.paginated {
        line.push_str(" [paginated]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::Recorded;

    #[test]
    fn test_render_lists_functions_and_tables() {
        let report = ListReport {
            functions: vec![
                FunctionInfo {
                    kind: FunctionKind::Query,
                    namespace: "issues".into(),
                    name: "list".into(),
                    reference: "api.issues.list".into(),
                    arguments: vec!["status".into(), "limit?".into()],
                    paginated: true,
                    opaque_args: false,
                },
                FunctionInfo {
                    kind: FunctionKind::Mutation,
                    namespace: "issues".into(),
                    name: "bulk".into(),
                    reference: "api.issues.bulk".into(),
                    arguments: Vec::new(),
                    paginated: false,
                    opaque_args: true,
                },
            ],
            tables: Vec::new(),
        };

        let mut out = Recorded::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            vec![
                "Functions (2):",
                "  query    api.issues.list(status, limit?) [paginated]",
                "  mutation api.issues.bulk(..)",
                "",
                "No tables found",
            ]
        );
    }
}
