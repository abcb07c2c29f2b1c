//! TypeScript type declarations.

use hookgen_codegen::{CodeFragment, Renderable};

/// `export type Name = <ty>;`
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("export type {} = {};", self.name, self.ty))]
    }
}

/// Double-quoted string literal.
pub fn string_literal(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

/// Union of the given members; `never` when there are none.
pub fn union(members: impl IntoIterator<Item = String>) -> String {
    let members: Vec<String> = members.into_iter().collect();
    if members.is_empty() {
        "never".to_string()
    } else {
        members.join(" | ")
    }
}
