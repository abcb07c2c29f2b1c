//! One file of hook wrappers.

use std::collections::{BTreeSet, HashMap};

use hookgen_codegen::{
    CodeFragment, Renderable, TypeMapper,
    generation::{ImportCollector, SeenNames},
};
use hookgen_core::{is_identifier, to_camel_case};
use hookgen_ir::{FunctionDescriptor, FunctionKind};

use crate::{
    TS_NAMING, TypeScriptTypeMapper,
    ast::{ArrowConst, Import, Param, string_literal},
    code_file::CodeFile,
    reference::{API_OBJECT, reference_path},
    type_mapper::uses_id,
};

const REACT_MODULE: &str = "convex/react";
const SERVER_MODULE: &str = "convex/server";
const SKIP: &str = "\"skip\"";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Parameters a generated query hook may declare next to the arguments.
const GENERATED_PARAMS: &[&str] = &["shouldSkip", "options"];

/// A function and the exported hook name planned for it.
#[derive(Debug, Clone)]
pub struct HookEntry<'a> {
    pub function: &'a FunctionDescriptor,
    pub name: String,
}

/// Hooks of one namespace, optionally introduced by a comment line.
#[derive(Debug, Clone)]
pub struct HookSection<'a> {
    pub title: Option<String>,
    pub hooks: Vec<HookEntry<'a>>,
}

/// A `queries/`, `mutations/` or `actions/` file.
pub struct HooksTs<'a> {
    sections: Vec<HookSection<'a>>,
    api_import: &'a str,
    data_model_import: &'a str,
}

/// Symbols the rendered hooks refer to.
#[derive(Default)]
struct Needs {
    primitives: BTreeSet<&'static str>,
    id: bool,
    function_args: bool,
    paginated_args: bool,
}

impl<'a> HooksTs<'a> {
    pub fn new(sections: Vec<HookSection<'a>>, api_import: &'a str, data_model_import: &'a str) -> Self {
        Self {
            sections,
            api_import,
            data_model_import,
        }
    }

    pub fn render(&self) -> String {
        let mut needs = Needs::default();
        let mut body = Vec::new();

        for section in &self.sections {
            let mut fragments = Vec::new();
            if let Some(title) = &section.title {
                fragments.push(CodeFragment::comment(title.clone()));
            }
            for (i, entry) in section.hooks.iter().enumerate() {
                if i > 0 {
                    fragments.push(CodeFragment::blank());
                }
                fragments.extend(hook(entry, &mut needs).to_fragments());
            }
            body.push(fragments);
        }

        let mut values = ImportCollector::new();
        for primitive in &needs.primitives {
            values.add(REACT_MODULE, primitive);
        }
        values.add(self.api_import, API_OBJECT);

        let mut types = ImportCollector::new();
        if needs.paginated_args {
            types.add(REACT_MODULE, "PaginatedQueryArgs");
        }
        if needs.function_args {
            types.add(SERVER_MODULE, "FunctionArgs");
        }
        if needs.id {
            types.add(self.data_model_import, "Id");
        }

        CodeFile::new()
            .imports(Import::from_collector(&values, false))
            .imports(Import::from_collector(&types, true))
            .add_all(body)
            .render()
    }
}

fn hook(entry: &HookEntry<'_>, needs: &mut Needs) -> ArrowConst {
    let function = entry.function;
    let reference = reference_path(function);

    match function.kind {
        FunctionKind::Mutation => {
            needs.primitives.insert("useMutation");
            ArrowConst::new(&entry.name, format!("useMutation({reference})"))
        }
        FunctionKind::Action => {
            needs.primitives.insert("useAction");
            ArrowConst::new(&entry.name, format!("useAction({reference})"))
        }
        FunctionKind::Query if function.uses_opaque_args => {
            opaque_query(&entry.name, function, &reference, needs)
        }
        FunctionKind::Query => query(&entry.name, function, &reference, needs),
    }
}

fn pagination_param() -> Param {
    Param::new("options", "{ initialNumItems: number }")
        .default_value(format!("{{ initialNumItems: {DEFAULT_PAGE_SIZE} }}"))
}

/// Query whose arguments could not be classified: one pass-through parameter.
fn opaque_query(
    name: &str,
    function: &FunctionDescriptor,
    reference: &str,
    needs: &mut Needs,
) -> ArrowConst {
    if function.is_paginated {
        needs.primitives.insert("usePaginatedQuery");
        needs.paginated_args = true;
        ArrowConst::new(
            name,
            format!("usePaginatedQuery({reference}, args ?? {SKIP}, options)"),
        )
        .param(Param::new(
            "args",
            format!("PaginatedQueryArgs<typeof {reference}> | null"),
        ))
        .param(pagination_param())
    } else {
        needs.primitives.insert("useQuery");
        needs.function_args = true;
        ArrowConst::new(name, format!("useQuery({reference}, args ?? {SKIP})")).param(
            Param::new("args", format!("FunctionArgs<typeof {reference}> | null")),
        )
    }
}

fn query(
    name: &str,
    function: &FunctionDescriptor,
    reference: &str,
    needs: &mut Needs,
) -> ArrowConst {
    let mapper = TypeScriptTypeMapper;
    let mut params = Vec::new();
    let mut fields = Vec::new();
    let locals = parameter_names(function);

    for arg in function.required_args() {
        needs.id |= uses_id(&arg.ty);
        let local = &locals[arg.name.as_str()];
        let ty = if arg.is_reference_id {
            mapper.map_pending_id_type(&arg.ty)
        } else {
            mapper.map_arg_type(&arg.ty)
        };
        fields.push(field(&arg.name, local));
        params.push(Param::new(local, ty));
    }

    for arg in function.optional_args() {
        needs.id |= uses_id(&arg.ty);
        let local = &locals[arg.name.as_str()];
        fields.push(format!(
            "...({local} != null ? {{ {} }} : {{}})",
            field(&arg.name, local)
        ));
        params.push(Param::new(local, mapper.map_optional_arg_type(&arg.ty)).optional());
    }

    let gates: Vec<&str> = function
        .required_ids()
        .map(|arg| locals[arg.name.as_str()].as_str())
        .collect();
    if gates.is_empty() && !function.is_paginated {
        params.push(Param::new("shouldSkip", "boolean").optional());
    }

    let object = if fields.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", fields.join(", "))
    };
    let args = if !gates.is_empty() {
        format!("{} ? {object} : {SKIP}", gates.join(" && "))
    } else if !function.is_paginated {
        format!("shouldSkip ? {SKIP} : {object}")
    } else {
        object
    };

    if function.is_paginated {
        needs.primitives.insert("usePaginatedQuery");
        params.push(pagination_param());
        ArrowConst::new(
            name,
            format!("usePaginatedQuery({reference}, {args}, options)"),
        )
        .params(params)
    } else {
        needs.primitives.insert("useQuery");
        ArrowConst::new(name, format!("useQuery({reference}, {args})")).params(params)
    }
}

/// Parameter name of every argument, keyed by argument name.
///
/// Names that are not identifiers are camel-cased, reserved words escaped, and
/// names taken by a generated parameter or an earlier argument prefixed.
fn parameter_names(function: &FunctionDescriptor) -> HashMap<&str, String> {
    let mut seen = SeenNames::new();
    for generated in GENERATED_PARAMS {
        seen.claim(generated.to_string(), None);
    }
    function
        .arguments
        .iter()
        .map(|arg| {
            let local = TS_NAMING.safe_name(&identifier_for(&arg.name));
            let prefixed = format!("_{local}");
            (arg.name.as_str(), seen.claim(local, Some(prefixed)))
        })
        .collect()
}

fn identifier_for(name: &str) -> String {
    if is_identifier(name) {
        return name.to_string();
    }
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '$' { c } else { '_' })
        .collect();
    let camel = to_camel_case(&cleaned);
    if is_identifier(&camel) {
        camel
    } else {
        format!("_{camel}")
    }
}

/// Object field passing `local` under the argument's own name.
fn field(key: &str, local: &str) -> String {
    if key == local {
        key.to_string()
    } else if is_identifier(key) {
        format!("{key}: {local}")
    } else {
        format!("{}: {local}", string_literal(key))
    }
}
