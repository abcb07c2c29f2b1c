use hookgen_codegen::{
    Generator, PreviewFile, Rendered,
    generation::{ExportLedger, FileStyle, NamePlan, SeenNames, plan_files},
};
use hookgen_core::{to_pascal_case, upper_first};
use hookgen_ir::{FunctionDescriptor, FunctionKind};
use tracing::debug;

use super::{EXTENSION, INDEX_FILE};
use crate::{
    Settings,
    files::{HookEntry, HookSection, HooksTs, IndexTs},
};

/// Generates `useXxx` wrappers, one directory per function kind.
pub struct HooksGenerator<'a> {
    functions: &'a [FunctionDescriptor],
    settings: &'a Settings,
}

impl<'a> HooksGenerator<'a> {
    pub fn new(functions: &'a [FunctionDescriptor], settings: &'a Settings) -> Self {
        Self {
            functions,
            settings,
        }
    }
}

/// `use` + PascalCase(qualifier) + UpperFirst(name).
pub fn hook_name(qualifier: &[&str], name: &str) -> String {
    let qualifier: String = qualifier.iter().map(|s| to_pascal_case(s)).collect();
    format!("use{qualifier}{}", upper_first(name))
}

impl Generator for HooksGenerator<'_> {
    fn name(&self) -> &'static str {
        "hooks"
    }

    fn file_extension(&self) -> &'static str {
        EXTENSION
    }

    fn owned_dirs(&self) -> &'static [&'static str] {
        &["queries", "mutations", "actions"]
    }

    fn render(&self) -> Rendered {
        let plan = NamePlan::build(self.functions, self.settings.structure, |f| {
            hook_name(&[], &f.name)
        });
        debug!(colliding = plan.len(), "planned hook names");

        let mut ledger = ExportLedger::new();
        let mut files = Vec::new();
        let mut index = IndexTs::new();
        // Split names share one barrel across every kind directory.
        let mut split_names = SeenNames::new();

        for kind in FunctionKind::ALL {
            let members = self.functions.iter().filter(|f| f.kind == kind);
            for file in plan_files(members, self.settings.layout) {
                let stem = format!("{}/{}", kind.plural(), file.stem);
                let mut file_names = SeenNames::new();
                let sections: Vec<HookSection<'_>> = file
                    .sections()
                    .into_iter()
                    .map(|(namespace, functions)| HookSection {
                        title: (file.style == FileStyle::Grouped).then(|| namespace.to_string()),
                        hooks: functions
                            .into_iter()
                            .map(|function| {
                                let candidate =
                                    hook_name(&plan.qualifier(function, file.style), &function.name);
                                let name = match file.style {
                                    FileStyle::Grouped => file_names.claim(
                                        candidate,
                                        Some(hook_name(
                                            &function.namespace.sub_segments(),
                                            &function.name,
                                        )),
                                    ),
                                    FileStyle::Split => split_names.claim(candidate, None),
                                };
                                HookEntry { function, name }
                            })
                            .collect(),
                    })
                    .collect();

                for hook in sections.iter().flat_map(|s| &s.hooks) {
                    ledger.record(&stem, &hook.name);
                }

                let content = HooksTs::new(
                    sections,
                    &self.settings.api_import,
                    &self.settings.data_model_import,
                )
                .render();
                files.push(PreviewFile::new(format!("{stem}.{EXTENSION}"), content));
                index = index.file(&stem);
            }
        }

        files.push(PreviewFile::new(INDEX_FILE, index.render()));
        Rendered {
            files,
            warnings: ledger.into_warnings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hookgen_ir::{Namespace, OutputLayout, StructureMode};

    use super::*;

    fn function(namespace: &str, name: &str, kind: FunctionKind) -> FunctionDescriptor {
        FunctionDescriptor::new(name, kind, Namespace::new(namespace), format!("{namespace}.ts"))
    }

    fn paths(files: &[PreviewFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn test_hook_name() {
        assert_eq!(hook_name(&[], "list"), "useList");
        assert_eq!(hook_name(&["admin", "user_queries"], "get"), "useAdminUserQueriesGet");
    }

    #[test]
    fn test_files_per_kind_and_index() {
        let functions = vec![
            function("issues/queries", "list", FunctionKind::Query),
            function("issues/mutations", "create", FunctionKind::Mutation),
            function("users", "sync", FunctionKind::Action),
        ];
        let settings = Settings::default();
        let files = HooksGenerator::new(&functions, &settings).preview();

        assert_eq!(
            paths(&files),
            vec![
                "queries/issues.ts",
                "mutations/issues.ts",
                "actions/users.ts",
                "index.ts"
            ]
        );
        assert!(files[3].content.contains(
            "export * from \"./queries/issues\";\nexport * from \"./mutations/issues\";\nexport * from \"./actions/users\";\n"
        ));
    }

    #[test]
    fn test_sibling_collisions_are_qualified() {
        let functions = vec![
            function("a/y", "get", FunctionKind::Query),
            function("a/x", "get", FunctionKind::Query),
            function("a/x", "list", FunctionKind::Query),
        ];
        let settings = Settings::default();
        let rendered = HooksGenerator::new(&functions, &settings).render();
        let grouped = &rendered.files[0].content;

        assert!(grouped.contains("export const useXGet = "));
        assert!(grouped.contains("export const useYGet = "));
        assert!(grouped.contains("export const useList = "));
        assert!(grouped.contains("// a/x\n"));
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_split_layout_always_qualifies() {
        let functions = vec![function("issues/queries", "list", FunctionKind::Query)];
        let settings = Settings {
            layout: OutputLayout::Split,
            ..Settings::default()
        };
        let files = HooksGenerator::new(&functions, &settings).preview();

        assert_eq!(files[0].path, "queries/issues-queries.ts");
        assert!(files[0].content.contains("export const useIssuesQueriesList = "));
        assert!(!files[0].content.contains("// issues/queries"));
    }

    #[test]
    fn test_flat_structure_repeat_is_fully_qualified() {
        let functions = vec![
            function("a/x/q", "get", FunctionKind::Query),
            function("a/y/q", "get", FunctionKind::Query),
        ];
        let settings = Settings {
            structure: StructureMode::Flat,
            ..Settings::default()
        };
        let rendered = HooksGenerator::new(&functions, &settings).render();
        let grouped = &rendered.files[0].content;

        assert!(grouped.contains("export const useXQGet = "));
        assert!(grouped.contains("export const useYQGet = "));
        assert!(!grouped.contains("export const useQGet = "));
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_grouped_names_are_unique_per_file() {
        // Pascal case folds `user_q` and `userQ` into the same qualifier.
        let functions = vec![
            function("a/user_q", "get", FunctionKind::Query),
            function("a/userQ", "get", FunctionKind::Query),
        ];
        let settings = Settings::default();
        let rendered = HooksGenerator::new(&functions, &settings).render();
        let grouped = &rendered.files[0].content;

        assert_eq!(grouped.matches("export const useUserQGet = ").count(), 1);
        assert!(grouped.contains("export const useUserQGet2 = "));
        assert!(rendered.warnings.is_empty());
    }

    #[test]
    fn test_split_names_are_unique_across_the_barrel() {
        let functions = vec![
            function("a/b_c", "get", FunctionKind::Query),
            function("a_b/c", "get", FunctionKind::Query),
        ];
        let settings = Settings {
            layout: OutputLayout::Split,
            ..Settings::default()
        };
        let rendered = HooksGenerator::new(&functions, &settings).render();

        assert_eq!(
            paths(&rendered.files),
            vec!["queries/a-b_c.ts", "queries/a_b-c.ts", "index.ts"]
        );
        assert!(rendered.files[0].content.contains("export const useABCGet = "));
        assert!(rendered.files[1].content.contains("export const useABCGet2 = "));
        assert!(rendered.warnings.is_empty());
    }
}
