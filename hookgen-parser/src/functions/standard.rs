//! `export const name = query({ args: {...}, handler })` registrations.

use hookgen_ir::FunctionKind;

use super::Registration;
use crate::{
    classify::{ArgsShape, classify_args_block},
    syntax::{Expr, Module, Property},
    validators::ValidatorTable,
};

fn kind_of(callee: &str) -> Option<FunctionKind> {
    match callee {
        "query" => Some(FunctionKind::Query),
        "mutation" => Some(FunctionKind::Mutation),
        "action" => Some(FunctionKind::Action),
        _ => None,
    }
}

pub(super) fn registrations(module: &Module, validators: &ValidatorTable) -> Vec<Registration> {
    module
        .exported()
        .filter_map(|decl| {
            let (callee, args) = decl.init.as_ident_call()?;
            let kind = kind_of(callee)?;
            Some(Registration {
                name: decl.name.clone(),
                kind,
                shape: args_shape(args.first(), validators),
            })
        })
        .collect()
}

/// Shape of the `args` property of the registration's config object.
fn args_shape(config: Option<&Expr>, validators: &ValidatorTable) -> ArgsShape {
    let Some(props) = config.and_then(Expr::as_object) else {
        return ArgsShape::default();
    };
    props
        .iter()
        .find_map(|prop| match prop {
            Property::KeyValue { key, value } if key == "args" => Some(value),
            _ => None,
        })
        .map(|value| classify_args_block(value, validators))
        .unwrap_or_default()
}
