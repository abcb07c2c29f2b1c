//! Exported arrow-function constants, the shape of every generated hook.

use hookgen_codegen::{CodeFragment, Renderable};

/// A parameter of an arrow function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            default: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        match &self.default {
            Some(default) => format!("{}{}: {} = {}", self.name, optional, self.ty, default),
            None => format!("{}{}: {}", self.name, optional, self.ty),
        }
    }
}

/// `export const name = (params) => body;`
///
/// Without parameters the declaration stays on one line; otherwise the body
/// moves to an indented second line.
#[derive(Debug, Clone)]
pub struct ArrowConst {
    name: String,
    params: Vec<Param>,
    body: String,
}

impl ArrowConst {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            body: body.into(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

}

impl Renderable for ArrowConst {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        if self.params.is_empty() {
            vec![CodeFragment::line(format!(
                "export const {} = () => {};",
                self.name, self.body
            ))]
        } else {
            vec![
                CodeFragment::line(format!("export const {} = ({}) =>", self.name, params)),
                CodeFragment::indent(vec![CodeFragment::line(format!("{};", self.body))]),
            ]
        }
    }
}
