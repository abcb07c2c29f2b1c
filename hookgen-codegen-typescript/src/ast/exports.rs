//! TypeScript re-export builder.

use hookgen_codegen::{CodeFragment, Renderable};

/// Builder for `export ... from` statements.
#[derive(Debug, Clone)]
pub struct Export {
    from: String,
    named: Vec<String>,
}

impl Export {
    /// `export * from "<from>";`
    pub fn all(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Re-export only the given name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = if self.named.is_empty() {
            format!("export * from \"{}\";", self.from)
        } else {
            format!(
                "export {{ {} }} from \"{}\";",
                self.named.join(", "),
                self.from
            )
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_export_all() {
        assert_eq!(
            Export::all("./queries/issues").to_fragments(),
            vec![CodeFragment::line("export * from \"./queries/issues\";")]
        );
    }

    #[test]
    fn test_re_export_named() {
        assert_eq!(
            Export::all("@/convex/_generated/api").named("api").to_fragments(),
            vec![CodeFragment::line(
                "export { api } from \"@/convex/_generated/api\";"
            )]
        );
    }
}
