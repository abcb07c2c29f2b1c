//! Exported object-literal constants.

use hookgen_codegen::{CodeFragment, Renderable};
use hookgen_core::is_identifier;

/// One line inside an object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Property { key: String, value: String },
    Comment(String),
}

/// `export const name = { key: value, ... } as const;`
#[derive(Debug, Clone, Default)]
pub struct ConstObject {
    name: String,
    entries: Vec<Entry>,
}

impl ConstObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(Entry::Property {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Comment(text.into()));
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for ConstObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Property { key, value } if is_identifier(key) => {
                    CodeFragment::line(format!("{key}: {value},"))
                }
                Entry::Property { key, value } => {
                    CodeFragment::line(format!("{}: {value},", super::string_literal(key)))
                }
                Entry::Comment(text) => CodeFragment::comment(text.clone()),
            })
            .collect();

        vec![CodeFragment::block(
            format!("export const {} = {{", self.name),
            body,
            Some("} as const;".to_string()),
        )]
    }
}
