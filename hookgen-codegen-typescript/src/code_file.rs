//! Structured TypeScript file generation.

use hookgen_codegen::{CodeBuilder, CodeFragment, GENERATED_NOTICE, Indent, Renderable};

use crate::ast::{Export, Import};

/// A structured representation of a generated TypeScript file.
///
/// Sections render in order: the generated-file notice, imports, body
/// elements, exports. Sections and body elements are separated by one blank
/// line.
///
/// # Example
///
/// ```ignore
/// let content = CodeFile::new()
///     .import(Import::new("convex/react").named("useMutation"))
///     .add(ArrowConst::new("useCreate", "useMutation(api.issues.create)"))
///     .render();
/// ```
pub struct CodeFile {
    notice: bool,
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
    exports: Vec<Export>,
}

impl Default for CodeFile {
    fn default() -> Self {
        Self {
            notice: true,
            imports: Vec::new(),
            body: Vec::new(),
            exports: Vec::new(),
        }
    }
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit the generated-file notice.
    pub fn without_notice(mut self) -> Self {
        self.notice = false;
        self
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    pub fn export(mut self, export: Export) -> Self {
        self.exports.push(export);
        self
    }

    pub fn exports(mut self, exports: impl IntoIterator<Item = Export>) -> Self {
        self.exports.extend(exports);
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        let mut sections = 0;

        if self.notice {
            builder.push_comment(GENERATED_NOTICE);
            sections += 1;
        }

        if !self.imports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for import in &self.imports {
                builder.emit(import);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
            sections += 1;
        }

        if !self.exports.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for export in &self.exports {
                builder.emit(export);
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty() && self.exports.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Join lines into one fragment.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_has_notice() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(
            file.render(),
            "// This file is generated by hookgen. Do not edit it by hand.\n"
        );
    }

    #[test]
    fn test_sections_are_blank_separated() {
        let file = CodeFile::new()
            .without_notice()
            .import(Import::new("convex/react").named("useMutation"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::lines(["const b = 2;", "const c = 3;"]))
            .export(Export::all("./other"));

        assert_eq!(
            file.render(),
            "import { useMutation } from \"convex/react\";\n\nconst a = 1;\n\nconst b = 2;\nconst c = 3;\n\nexport * from \"./other\";\n"
        );
    }

    #[test]
    fn test_exports_only() {
        let file = CodeFile::new().export(Export::all("./tables"));
        assert_eq!(
            file.render(),
            "// This file is generated by hookgen. Do not edit it by hand.\n\nexport * from \"./tables\";\n"
        );
    }
}
