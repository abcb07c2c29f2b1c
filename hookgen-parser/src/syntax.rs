//! Conversion of a tree-sitter TypeScript tree into a small expression tree.
//!
//! Only the shapes that registrations, validators and schemas are built from
//! get a real node: identifiers, member access, calls, object and array
//! literals, strings and numbers. Everything else (arrow functions, binary
//! expressions, templates) is kept as [`Expr::Opaque`] with its source text,
//! which is enough for the extractors to skip over it safely.

use tree_sitter::{Node, Parser, Tree};

use crate::SyntaxError;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    /// String literal contents without the quotes. Escapes are kept as written.
    Str(String),
    Number(String),
    Member {
        object: Box<Expr>,
        property: String,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Object(Vec<Property>),
    Array(Vec<Expr>),
    Opaque(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    KeyValue { key: String, value: Expr },
    Shorthand(String),
    Spread(Expr),
    /// Methods, accessors and computed keys.
    Other(String),
}

impl Expr {
    /// The dotted path of an identifier or member chain, e.g. `Issues.listValidator`.
    pub fn path(&self) -> Option<String> {
        match self {
            Expr::Ident(name) => Some(name.clone()),
            Expr::Member { object, property } => {
                object.path().map(|base| format!("{base}.{property}"))
            }
            _ => None,
        }
    }

    /// Callee name and arguments of a call to a plain identifier, e.g. `defineTable(...)`.
    pub fn as_ident_call(&self) -> Option<(&str, &[Expr])> {
        match self {
            Expr::Call { callee, args } => match callee.as_ref() {
                Expr::Ident(name) => Some((name.as_str(), args.as_slice())),
                _ => None,
            },
            _ => None,
        }
    }

    /// Method name and arguments of a call on `receiver`, e.g. `v.string()`.
    pub fn as_method_call(&self, receiver: &str) -> Option<(&str, &[Expr])> {
        match self {
            Expr::Call { callee, args } => match callee.as_ref() {
                Expr::Member { object, property }
                    if matches!(object.as_ref(), Expr::Ident(name) if name == receiver) =>
                {
                    Some((property.as_str(), args.as_slice()))
                }
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Property]> {
        match self {
            Expr::Object(props) => Some(props),
            _ => None,
        }
    }

    /// The expression a method chain starts from.
    ///
    /// `defineTable({...}).index("by_x", ["x"])` yields the `defineTable` call.
    pub fn chain_base(&self) -> &Expr {
        let mut current = self;
        loop {
            match current {
                Expr::Call { callee, .. } => match callee.as_ref() {
                    Expr::Member { object, .. } => current = object,
                    _ => return current,
                },
                Expr::Member { object, .. } => current = object,
                _ => return current,
            }
        }
    }

    /// Visit this expression and every nested expression, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Expr)) {
        visit(self);
        match self {
            Expr::Member { object, .. } => object.walk(visit),
            Expr::Call { callee, args } => {
                callee.walk(visit);
                for arg in args {
                    arg.walk(visit);
                }
            }
            Expr::Object(props) => {
                for prop in props {
                    match prop {
                        Property::KeyValue { value, .. } => value.walk(visit),
                        Property::Spread(value) => value.walk(visit),
                        Property::Shorthand(_) | Property::Other(_) => {}
                    }
                }
            }
            Expr::Array(items) => {
                for item in items {
                    item.walk(visit);
                }
            }
            Expr::Ident(_) | Expr::Str(_) | Expr::Number(_) | Expr::Opaque(_) => {}
        }
    }
}

/// A top-level `const`/`let`/`var` binding or `export default` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Binding name, or `default` for `export default`.
    pub name: String,
    pub exported: bool,
    pub init: Expr,
    /// Source text of the initializer.
    pub source: String,
    pub line: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub declarations: Vec<Declaration>,
    /// Number of `export { ... } from` and `export * from` statements.
    pub reexports: usize,
}

impl Module {
    pub fn exported(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|d| d.exported)
    }
}

/// Parse a source file and collect its top-level declarations.
pub fn parse_module(src: &str) -> Result<Module, SyntaxError> {
    let tree = parse_tree(src)?;
    let source = Source(src);
    let mut module = Module::default();

    for statement in named_children(tree.root_node()) {
        match statement.kind() {
            "lexical_declaration" | "variable_declaration" => {
                source.bindings(statement, false, &mut module);
            }
            "export_statement" => source.export_statement(statement, &mut module),
            _ => {}
        }
    }
    Ok(module)
}

/// Parse a single expression, e.g. for tests or validator snippets.
pub fn parse_expr(src: &str) -> Result<Expr, SyntaxError> {
    // Parenthesized so that a leading `{` is read as an object literal.
    let wrapped = format!("({src}\n);");
    let tree = parse_tree(&wrapped)?;
    let source = Source(&wrapped);

    named_children(tree.root_node())
        .into_iter()
        .find(|n| n.kind() == "expression_statement")
        .and_then(|statement| named_children(statement).into_iter().next())
        .map(|expr| source.expr(expr))
        .ok_or_else(|| SyntaxError::new("expected an expression", 1))
}

fn parse_tree(src: &str) -> Result<Tree, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|err| SyntaxError::new(format!("failed to load grammar: {err}"), 1))?;
    let tree = parser
        .parse(src, None)
        .ok_or_else(|| SyntaxError::new("parser produced no tree", 1))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(first_error(root));
    }
    Ok(tree)
}

/// Describe the first `ERROR` or missing node below `node`.
fn first_error(node: Node<'_>) -> SyntaxError {
    let line = line_of(node);
    if node.is_missing() {
        return SyntaxError::new(format!("expected '{}'", node.kind()), line);
    }
    if node.is_error() {
        return SyntaxError::new("unexpected syntax", line);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .find(|child| child.has_error())
        .map(first_error)
        .unwrap_or_else(|| SyntaxError::new("unexpected syntax", line))
}

fn line_of(node: Node<'_>) -> u32 {
    u32::try_from(node.start_position().row + 1).unwrap_or(u32::MAX)
}

/// Named children without comments.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == token)
}

#[derive(Clone, Copy)]
struct Source<'s>(&'s str);

impl<'s> Source<'s> {
    fn text(self, node: Node<'_>) -> &'s str {
        &self.0[node.byte_range()]
    }

    fn export_statement(self, node: Node<'_>, module: &mut Module) {
        if node.child_by_field_name("source").is_some() {
            module.reexports += 1;
            return;
        }
        if let Some(declaration) = node.child_by_field_name("declaration")
            && matches!(
                declaration.kind(),
                "lexical_declaration" | "variable_declaration"
            )
        {
            self.bindings(declaration, true, module);
            return;
        }
        if has_token(node, "default")
            && let Some(value) = node
                .child_by_field_name("value")
                .or_else(|| node.child_by_field_name("declaration"))
        {
            module.declarations.push(Declaration {
                name: "default".to_string(),
                exported: true,
                init: self.expr(value),
                source: self.text(value).to_string(),
                line: line_of(value),
            });
        }
        // `export function`, `export type`, `export interface` and local
        // `export { ... }` lists declare nothing we read.
    }

    /// Every `name = value` declarator of a `const`/`let`/`var` statement.
    fn bindings(self, node: Node<'_>, exported: bool, module: &mut Module) {
        for declarator in named_children(node) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            // Destructuring patterns are not bindings we can name.
            let Some(name) = declarator
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier")
            else {
                continue;
            };
            let Some(value) = declarator.child_by_field_name("value") else {
                continue;
            };
            module.declarations.push(Declaration {
                name: self.text(name).to_string(),
                exported,
                init: self.expr(value),
                source: self.text(value).to_string(),
                line: line_of(name),
            });
        }
    }

    fn expr(self, node: Node<'_>) -> Expr {
        match node.kind() {
            "identifier" | "true" | "false" | "null" | "undefined" => {
                Expr::Ident(self.text(node).to_string())
            }
            "string" => Expr::Str(unquote(self.text(node)).to_string()),
            "number" => Expr::Number(self.text(node).to_string()),
            "member_expression" => {
                match (
                    node.child_by_field_name("object"),
                    node.child_by_field_name("property"),
                ) {
                    (Some(object), Some(property)) => Expr::Member {
                        object: Box::new(self.expr(object)),
                        property: self.text(property).to_string(),
                    },
                    _ => self.opaque(node),
                }
            }
            "call_expression" => {
                match (
                    node.child_by_field_name("function"),
                    node.child_by_field_name("arguments"),
                ) {
                    (Some(callee), Some(args)) if args.kind() == "arguments" => Expr::Call {
                        callee: Box::new(self.expr(callee)),
                        args: self.items(args),
                    },
                    // Tagged templates.
                    _ => self.opaque(node),
                }
            }
            "object" => Expr::Object(
                named_children(node)
                    .into_iter()
                    .map(|prop| self.property(prop))
                    .collect(),
            ),
            "array" => Expr::Array(self.items(node)),
            // Type assertions and grouping leave the value unchanged.
            "parenthesized_expression"
            | "as_expression"
            | "satisfies_expression"
            | "non_null_expression" => match named_children(node).into_iter().next() {
                Some(inner) => self.expr(inner),
                None => self.opaque(node),
            },
            _ => self.opaque(node),
        }
    }

    /// Call arguments or array elements. Spreads are kept opaque.
    fn items(self, node: Node<'_>) -> Vec<Expr> {
        named_children(node)
            .into_iter()
            .map(|item| match item.kind() {
                "spread_element" => self.opaque(item),
                _ => self.expr(item),
            })
            .collect()
    }

    fn property(self, node: Node<'_>) -> Property {
        match node.kind() {
            "pair" => {
                let key = node.child_by_field_name("key").and_then(|key| match key.kind() {
                    "property_identifier" | "number" => Some(self.text(key).to_string()),
                    "string" => Some(unquote(self.text(key)).to_string()),
                    _ => None,
                });
                match (key, node.child_by_field_name("value")) {
                    (Some(key), Some(value)) => Property::KeyValue {
                        key,
                        value: self.expr(value),
                    },
                    _ => Property::Other(self.text(node).to_string()),
                }
            }
            "shorthand_property_identifier" => Property::Shorthand(self.text(node).to_string()),
            "spread_element" => match named_children(node).into_iter().next() {
                Some(inner) => Property::Spread(self.expr(inner)),
                None => Property::Other(self.text(node).to_string()),
            },
            _ => Property::Other(self.text(node).to_string()),
        }
    }

    fn opaque(self, node: Node<'_>) -> Expr {
        Expr::Opaque(self.text(node).to_string())
    }
}

fn unquote(text: &str) -> &str {
    if text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
