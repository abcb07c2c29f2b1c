//! Classification of argument validators into [`ArgType`]s.

use hookgen_ir::{ArgType, ArgumentDescriptor};

use crate::{
    syntax::{Expr, Property},
    validators::ValidatorTable,
};

/// Receiver of validator builder calls, as in `v.string()`.
const VALIDATOR_NAMESPACE: &str = "v";

/// Argument removed from the signature; marks the function as paginated.
pub const PAGINATION_ARG: &str = "paginationOpts";

/// Maximum number of validator references followed for one value.
const MAX_REFERENCE_DEPTH: usize = 8;

/// Classified shape of an argument block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgsShape {
    pub arguments: Vec<ArgumentDescriptor>,
    pub is_paginated: bool,
    pub opaque: bool,
}

impl ArgsShape {
    /// A shape that cannot be described argument by argument.
    pub fn opaque() -> Self {
        Self {
            opaque: true,
            ..Self::default()
        }
    }
}

/// Classify the expression given as `args` or `.input(...)`.
///
/// Accepts an object literal, `v.object({...})`, or a reference resolved
/// through `validators`. Unresolved references yield an empty shape.
pub fn classify_args_block(expr: &Expr, validators: &ValidatorTable) -> ArgsShape {
    classify_args_block_at(expr, validators, 0)
}

fn classify_args_block_at(expr: &Expr, validators: &ValidatorTable, depth: usize) -> ArgsShape {
    if let Some(props) = expr.as_object() {
        return classify_properties(props, validators);
    }
    if let Some(("object", [inner])) = expr.as_method_call(VALIDATOR_NAMESPACE)
        && let Some(props) = inner.as_object()
    {
        return classify_properties(props, validators);
    }
    if let Some(reference) = expr.path() {
        return match validators.lookup(&reference) {
            Some(def) if depth < MAX_REFERENCE_DEPTH => {
                classify_args_block_at(&def.expr, validators, depth + 1)
            }
            Some(_) => ArgsShape::opaque(),
            None => ArgsShape::default(),
        };
    }
    ArgsShape::opaque()
}

/// Classify every property of an args object literal, in source order.
pub fn classify_properties(props: &[Property], validators: &ValidatorTable) -> ArgsShape {
    let mut shape = ArgsShape::default();

    for prop in props {
        match prop {
            Property::KeyValue { key, .. } if key == PAGINATION_ARG => {
                shape.is_paginated = true;
            }
            Property::KeyValue { key, value } => {
                let arg = classify_value(key, value, validators);
                if arg.ty.is_unknown() {
                    shape.opaque = true;
                }
                shape.arguments.push(arg);
            }
            Property::Shorthand(name) if name == PAGINATION_ARG => {
                shape.is_paginated = true;
            }
            Property::Shorthand(_) | Property::Spread(_) | Property::Other(_) => {
                shape.opaque = true;
            }
        }
    }

    shape
}

/// Classify a single `key: validator` pair.
pub fn classify_value(name: &str, value: &Expr, validators: &ValidatorTable) -> ArgumentDescriptor {
    match classify(value, validators, 0) {
        Some((ty, true)) => ArgumentDescriptor::new(name, ty).optional(),
        Some((ty, false)) => ArgumentDescriptor::new(name, ty),
        None => ArgumentDescriptor::new(name, ArgType::Unknown),
    }
}

/// Returns the type and whether it is optional.
fn classify(expr: &Expr, validators: &ValidatorTable, depth: usize) -> Option<(ArgType, bool)> {
    let expr = resolve(expr, validators, depth)?;

    if let Some(inner) = unwrap_call(expr, "optional", validators, depth) {
        if let Some(element) = unwrap_call(inner, "array", validators, depth)
            && let Some(table) = id_table(element, validators, depth)
        {
            return Some((ArgType::Array(Box::new(ArgType::Id(table))), true));
        }
        if let Some(table) = id_table(inner, validators, depth) {
            return Some((ArgType::Id(table), true));
        }
        return primitive(inner, validators, depth).map(|ty| (ty, true));
    }

    if let Some(element) = unwrap_call(expr, "array", validators, depth) {
        if let Some(table) = id_table(element, validators, depth) {
            return Some((ArgType::Array(Box::new(ArgType::Id(table))), false));
        }
        return primitive(element, validators, depth)
            .map(|ty| (ArgType::Array(Box::new(ty)), false));
    }

    if let Some(table) = id_table(expr, validators, depth) {
        return Some((ArgType::Id(table), false));
    }
    primitive(expr, validators, depth).map(|ty| (ty, false))
}

/// Follow identifier and member references to validator definitions.
fn resolve<'a>(expr: &'a Expr, validators: &'a ValidatorTable, depth: usize) -> Option<&'a Expr> {
    match expr.path() {
        Some(reference) => {
            if depth >= MAX_REFERENCE_DEPTH {
                return None;
            }
            let def = validators.lookup(&reference)?;
            resolve(&def.expr, validators, depth + 1)
        }
        None => Some(expr),
    }
}

/// The single argument of `v.<method>(x)`, resolved.
fn unwrap_call<'a>(
    expr: &'a Expr,
    method: &str,
    validators: &'a ValidatorTable,
    depth: usize,
) -> Option<&'a Expr> {
    match expr.as_method_call(VALIDATOR_NAMESPACE)? {
        (m, [arg]) if m == method => resolve(arg, validators, depth),
        _ => None,
    }
}

fn id_table(expr: &Expr, validators: &ValidatorTable, depth: usize) -> Option<String> {
    let expr = resolve(expr, validators, depth)?;
    match expr.as_method_call(VALIDATOR_NAMESPACE)? {
        ("id", [Expr::Str(table)]) => Some(table.clone()),
        _ => None,
    }
}

fn primitive(expr: &Expr, validators: &ValidatorTable, depth: usize) -> Option<ArgType> {
    let expr = resolve(expr, validators, depth)?;
    let (method, args) = expr.as_method_call(VALIDATOR_NAMESPACE)?;
    let ty = match (method, args) {
        ("string", []) => ArgType::String,
        ("number" | "float64", []) => ArgType::Number,
        ("int64" | "bigint", []) => ArgType::BigInt,
        ("boolean", []) => ArgType::Boolean,
        ("null", []) => ArgType::Null,
        ("bytes", []) => ArgType::Bytes,
        ("any", []) => ArgType::Any,
        ("literal", [value]) => ArgType::Literal(literal_text(value)?),
        _ => return None,
    };
    Some(ty)
}

fn literal_text(value: &Expr) -> Option<String> {
    match value {
        Expr::Str(s) => Some(format!("\"{s}\"")),
        Expr::Number(n) => Some(n.clone()),
        Expr::Ident(b) if b == "true" || b == "false" => Some(b.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::syntax::parse_expr;

    fn classify_src(src: &str) -> ArgumentDescriptor {
        classify_value("x", &parse_expr(src).unwrap(), &ValidatorTable::new())
    }

    fn shape(src: &str, validators: &ValidatorTable) -> ArgsShape {
        classify_args_block(&parse_expr(src).unwrap(), validators)
    }

    #[test]
    fn test_precedence() {
        let cases = [
            (
                r#"v.optional(v.array(v.id("tags")))"#,
                ArgType::Array(Box::new(ArgType::Id("tags".into()))),
                true,
            ),
            (
                r#"v.array(v.id("tags"))"#,
                ArgType::Array(Box::new(ArgType::Id("tags".into()))),
                false,
            ),
            (r#"v.optional(v.id("users"))"#, ArgType::Id("users".into()), true),
            (r#"v.id("users")"#, ArgType::Id("users".into()), false),
            ("v.optional(v.boolean())", ArgType::Boolean, true),
            ("v.float64()", ArgType::Number, false),
            ("v.int64()", ArgType::BigInt, false),
            (
                "v.array(v.string())",
                ArgType::Array(Box::new(ArgType::String)),
                false,
            ),
            (r#"v.literal("open")"#, ArgType::Literal("\"open\"".into()), false),
        ];

        for (src, ty, optional) in cases {
            let arg = classify_src(src);
            assert_eq!(arg.ty, ty, "{src}");
            assert_eq!(arg.optional, optional, "{src}");
        }
    }

    #[test]
    fn test_id_flags() {
        let arg = classify_src(r#"v.optional(v.array(v.id("tags")))"#);
        assert!(arg.is_reference_id_array);
        assert!(!arg.is_reference_id);
        assert_eq!(arg.referenced_table.as_deref(), Some("tags"));
    }

    #[test]
    fn test_unknown_values() {
        for src in [
            "v.union(v.literal(\"a\"), v.literal(\"b\"))",
            "v.object({ a: v.string() })",
            "v.record(v.string(), v.number())",
            "v.optional(v.array(v.string()))",
            "someHelper()",
        ] {
            assert!(classify_src(src).ty.is_unknown(), "{src}");
        }
    }

    #[test]
    fn test_pagination_is_removed() {
        let s = shape(
            "{ paginationOpts: paginationOptsValidator, status: v.string() }",
            &ValidatorTable::new(),
        );
        assert!(s.is_paginated);
        assert!(!s.opaque);
        assert_eq!(s.arguments.len(), 1);
        assert_eq!(s.arguments[0].name, "status");
    }

    #[test]
    fn test_spread_and_shorthand_are_opaque() {
        let table = ValidatorTable::new();
        assert!(shape("{ ...base, a: v.string() }", &table).opaque);
        assert!(shape("{ status }", &table).opaque);
    }

    #[test]
    fn test_unknown_value_is_kept_and_opaque() {
        let s = shape("{ filter: v.object({}), id: v.id(\"users\") }", &ValidatorTable::new());
        assert!(s.opaque);
        assert_eq!(s.arguments.len(), 2);
        assert!(s.arguments[0].ty.is_unknown());
    }

    #[test]
    fn test_v_object_is_unwrapped() {
        let s = shape("v.object({ a: v.string() })", &ValidatorTable::new());
        assert_eq!(s.arguments.len(), 1);
        assert!(!s.opaque);
    }

    #[test]
    fn test_reference_resolution() {
        let mut table = ValidatorTable::new();
        table
            .register(
                Some("Issues"),
                Path::new("model/issues/validators.ts"),
                r#"
export const statusValidator = v.string();
export const listValidator = v.object({ status: statusValidator, limit: v.optional(v.number()) });
export const choice = v.union(v.literal("a"), v.literal("b"));
"#,
            )
            .unwrap();

        let s = shape("Issues.listValidator", &table);
        assert!(!s.opaque);
        assert_eq!(s.arguments[0].name, "status");
        assert_eq!(s.arguments[0].ty, ArgType::String);
        assert!(!s.arguments[0].optional);
        assert!(s.arguments[1].optional);

        assert!(shape("Issues.choice", &table).opaque);
        assert_eq!(shape("Missing.thing", &table), ArgsShape::default());
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut table = ValidatorTable::new();
        table
            .register(None, Path::new("v.ts"), "export const loop = loop;")
            .unwrap();
        assert!(classify_value("x", &Expr::Ident("loop".into()), &table).ty.is_unknown());
        assert!(shape("loop", &table).opaque);
    }
}
