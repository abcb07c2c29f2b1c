//! TypeScript import builder.

use hookgen_codegen::{
    CodeFragment, Renderable,
    generation::ImportCollector,
};

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }

    /// One import per module of `collector`, in collection order.
    pub fn from_collector(collector: &ImportCollector, type_only: bool) -> Vec<Import> {
        collector
            .iter()
            .map(|(module, symbols)| Import {
                from: module.to_string(),
                named: symbols.iter().cloned().collect(),
                type_only,
            })
            .collect()
    }

    fn statement(&self) -> String {
        let type_kw = if self.type_only { "type " } else { "" };
        if self.named.is_empty() {
            format!("import \"{}\";", self.from)
        } else {
            format!(
                "import {}{{ {} }} from \"{}\";",
                type_kw,
                self.named.join(", "),
                self.from
            )
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.statement())]
    }
}

#[cfg(test)]
mod tests {
    use hookgen_codegen::CodeBuilder;

    use super::*;

    fn render(import: &Import) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(import);
        builder.build()
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("convex/react").named("useQuery").named("useMutation");
        assert_eq!(
            render(&i),
            "import { useQuery, useMutation } from \"convex/react\";\n"
        );
    }

    #[test]
    fn test_type_only_import() {
        let i = Import::new("@/convex/_generated/dataModel")
            .named("Id")
            .type_only();
        assert_eq!(
            render(&i),
            "import type { Id } from \"@/convex/_generated/dataModel\";\n"
        );
    }

    #[test]
    fn test_from_collector() {
        let mut collector = ImportCollector::new();
        collector.add("convex/react", "useQuery");
        collector.add("convex/react", "usePaginatedQuery");
        collector.add("@/convex/_generated/api", "api");

        let imports = Import::from_collector(&collector, false);

        assert_eq!(imports.len(), 2);
        assert_eq!(
            render(&imports[0]),
            "import { usePaginatedQuery, useQuery } from \"convex/react\";\n"
        );
    }
}
