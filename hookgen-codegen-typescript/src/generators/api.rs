use hookgen_codegen::{
    Generator, PreviewFile, Rendered,
    generation::{ExportLedger, FileStyle, LayoutFile, NamePlan, SeenNames, clean_segment, plan_files, sections},
};
use hookgen_core::{lower_first, to_pascal_case, upper_first};
use hookgen_ir::{FunctionDescriptor, FunctionKind};

use super::{EXTENSION, INDEX_FILE};
use crate::{
    Settings, TS_NAMING,
    ast::ConstObject,
    files::{ApiTs, IndexTs},
    reference::{API_OBJECT, reference_path},
};

/// Generates per-namespace objects mapping binding names to typed
/// function references.
pub struct ApiGenerator<'a> {
    functions: &'a [FunctionDescriptor],
    settings: &'a Settings,
}

impl<'a> ApiGenerator<'a> {
    pub fn new(functions: &'a [FunctionDescriptor], settings: &'a Settings) -> Self {
        Self {
            functions,
            settings,
        }
    }

    /// Object names are claimed in `object_names`, shared by every file of
    /// the barrel. Keys are unique per file.
    fn objects(
        &self,
        file: &LayoutFile<'_>,
        plan: &NamePlan,
        object_names: &mut SeenNames,
    ) -> Vec<ConstObject> {
        let prefix = match file.style {
            FileStyle::Grouped => TS_NAMING.value_name(&file.stem),
            FileStyle::Split => TS_NAMING.value_name(&file.stem.replace('-', "_")),
        };

        let mut objects = Vec::new();
        let mut seen = SeenNames::new();
        for kind in FunctionKind::ALL {
            let members: Vec<&FunctionDescriptor> = file
                .functions
                .iter()
                .copied()
                .filter(|f| f.kind == kind)
                .collect();
            if members.is_empty() {
                continue;
            }

            let name = object_names.claim(format!("{prefix}{}", to_pascal_case(kind.plural())), None);
            let mut object = ConstObject::new(name);
            for (namespace, functions) in sections(&members) {
                if file.style == FileStyle::Grouped {
                    object.push_comment(namespace.to_string());
                }
                for function in functions {
                    let key = match file.style {
                        FileStyle::Grouped => {
                            let qualifier = plan.qualifier(function, FileStyle::Grouped);
                            seen.claim(key_name(&qualifier, &function.name), fallback_key(function))
                        }
                        FileStyle::Split => seen.claim(function.name.clone(), None),
                    };
                    object.push_property(
                        key,
                        format!(
                            "{} as FunctionReference<\"{}\">",
                            reference_path(function),
                            kind.as_str()
                        ),
                    );
                }
            }
            objects.push(object);
        }
        objects
    }
}

/// Property name: the function name, or camelCase(qualifier + name).
fn key_name(qualifier: &[&str], name: &str) -> String {
    if qualifier.is_empty() {
        return name.to_string();
    }
    let qualifier: String = qualifier.iter().map(|s| to_pascal_case(s)).collect();
    lower_first(&format!("{qualifier}{}", upper_first(name)))
}

/// Key prefixed with the last sub-namespace segment, kind word removed.
fn fallback_key(function: &FunctionDescriptor) -> Option<String> {
    let subs = function.namespace.sub_segments();
    let cleaned = clean_segment(subs.last()?);
    (!cleaned.is_empty()).then(|| key_name(&[cleaned], &function.name))
}

impl Generator for ApiGenerator<'_> {
    fn name(&self) -> &'static str {
        "api"
    }

    fn file_extension(&self) -> &'static str {
        EXTENSION
    }

    fn render(&self) -> Rendered {
        let plan = NamePlan::build(self.functions, self.settings.structure, |f| f.name.clone());

        let mut ledger = ExportLedger::new();
        let mut files = Vec::new();
        let mut index = IndexTs::new().reexport(API_OBJECT, &self.settings.api_import);
        let mut object_names = SeenNames::new();

        for file in plan_files(self.functions, self.settings.layout) {
            let objects = self.objects(&file, &plan, &mut object_names);
            for object in &objects {
                ledger.record(&file.stem, object.name());
            }
            let content = ApiTs::new(objects, &self.settings.api_import).render();
            files.push(PreviewFile::new(format!("{}.{EXTENSION}", file.stem), content));
            index = index.file(&file.stem);
        }

        files.push(PreviewFile::new(INDEX_FILE, index.render()));
        Rendered {
            files,
            warnings: ledger.into_warnings(),
        }
    }
}
