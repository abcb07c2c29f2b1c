//! Builder-chain registrations such as
//! `export const list = authedQuery.input({ id: v.id("users") }).handler(fn).public()`.

use hookgen_ir::FunctionKind;

use super::Registration;
use crate::{
    classify::{ArgsShape, classify_args_block},
    syntax::{Expr, Module},
    validators::ValidatorTable,
};

/// Builder roots that carry no kind of their own.
const GENERIC_ROOTS: &[&str] = &["convex", "builder", "fluent", "app", "procedure"];

/// Prefixes of kind-specific roots: `authedQuery`, `adminMutation`, ...
const ROOT_PREFIXES: &[&str] = &["public", "authed", "auth", "user", "admin", "protected"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Kind(FunctionKind),
    Generic,
}

fn classify_root(name: &str) -> Option<Root> {
    if GENERIC_ROOTS.contains(&name) {
        return Some(Root::Generic);
    }
    if let Some(kind) = kind_of_method(name) {
        return Some(Root::Kind(kind));
    }
    ROOT_PREFIXES.iter().find_map(|prefix| {
        let rest = name.strip_prefix(prefix)?;
        match rest {
            "Query" => Some(Root::Kind(FunctionKind::Query)),
            "Mutation" => Some(Root::Kind(FunctionKind::Mutation)),
            "Action" => Some(Root::Kind(FunctionKind::Action)),
            _ => None,
        }
    })
}

fn kind_of_method(name: &str) -> Option<FunctionKind> {
    match name {
        "query" => Some(FunctionKind::Query),
        "mutation" => Some(FunctionKind::Mutation),
        "action" => Some(FunctionKind::Action),
        _ => None,
    }
}

/// A flattened builder chain: `root.a(x).b.c(y)` → `root`, `[a(x), b, c(y)]`.
#[derive(Debug)]
struct Chain<'a> {
    root: &'a str,
    links: Vec<Link<'a>>,
}

#[derive(Debug)]
struct Link<'a> {
    method: &'a str,
    /// `None` for property access without a call.
    args: Option<&'a [Expr]>,
}

impl<'a> Chain<'a> {
    fn flatten(expr: &'a Expr) -> Option<Self> {
        let mut links = Vec::new();
        let mut current = expr;
        let root = loop {
            match current {
                Expr::Call { callee, args } => match callee.as_ref() {
                    Expr::Member { object, property } => {
                        links.push(Link {
                            method: property,
                            args: Some(args.as_slice()),
                        });
                        current = object;
                    }
                    Expr::Ident(name) => break name.as_str(),
                    _ => return None,
                },
                Expr::Member { object, property } => {
                    links.push(Link {
                        method: property,
                        args: None,
                    });
                    current = object;
                }
                Expr::Ident(name) => break name.as_str(),
                _ => return None,
            }
        };
        links.reverse();
        Some(Self { root, links })
    }

    /// Links up to and including the first visibility marker, and whether it is public.
    fn until_visibility(&self) -> Option<(&[Link<'a>], bool)> {
        let end = self
            .links
            .iter()
            .position(|l| l.args.is_some() && matches!(l.method, "public" | "internal"))?;
        Some((&self.links[..=end], self.links[end].method == "public"))
    }
}

pub(super) fn registrations(module: &Module, validators: &ValidatorTable) -> Vec<Registration> {
    module
        .exported()
        .filter_map(|decl| {
            let chain = Chain::flatten(&decl.init)?;
            let (links, public) = chain.until_visibility()?;
            if !public {
                return None;
            }
            let kind = match classify_root(chain.root)? {
                Root::Kind(kind) => kind,
                Root::Generic => links
                    .iter()
                    .filter(|l| l.args.is_some())
                    .find_map(|l| kind_of_method(l.method))?,
            };
            Some(Registration {
                name: decl.name.clone(),
                kind,
                shape: input_shape(links, validators),
            })
        })
        .collect()
}

fn input_shape(links: &[Link<'_>], validators: &ValidatorTable) -> ArgsShape {
    links
        .iter()
        .find(|l| l.method == "input")
        .and_then(|l| l.args)
        .and_then(|args| args.first())
        .map(|arg| classify_args_block(arg, validators))
        .unwrap_or_default()
}
