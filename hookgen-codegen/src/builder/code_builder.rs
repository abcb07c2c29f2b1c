//! Indentation-aware text buffer.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates generated lines at a tracked indentation level.
///
/// `push_` methods take `&mut self` for use in loops; the consuming methods
/// chain.
///
/// # Example
///
/// ```
/// use hookgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .block_with_close("export const issuesQueries = {", "} as const;", |b| {
///         b.line("list: api.issues.queries.list,")
///     })
///     .build();
///
/// assert_eq!(
///     code,
///     "export const issuesQueries = {\n  list: api.issues.queries.list,\n} as const;\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        self.push_line(&format!("// {text}"))
    }

    /// Append every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.apply_indented(body);
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(body) => self.apply_indented(body),
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
        }
    }

    fn apply_indented(&mut self, body: Vec<CodeFragment>) {
        self.push_indent();
        for fragment in body {
            self.apply_fragment(fragment);
        }
        self.push_dedent();
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.push_comment(text);
        self
    }

    /// Header line, body built by `f` one level deeper, closing line.
    pub fn block_with_close<F>(mut self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.push_line(header).push_indent();
        f(self).dedent().line(close)
    }

    pub fn current_indent(&self) -> usize {
        self.level
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::typescript().line("const x = 1;").build();
        assert_eq!(code, "const x = 1;\n");
    }

    #[test]
    fn test_block_indents_body() {
        let code = CodeBuilder::typescript()
            .block_with_close("export const useList = () => {", "};", |b| {
                b.line("return useQuery(api.issues.list);")
            })
            .build();

        assert_eq!(
            code,
            "export const useList = () => {\n  return useQuery(api.issues.list);\n};\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::typescript().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_comment() {
        let code = CodeBuilder::typescript().comment("issues/queries").build();
        assert_eq!(code, "// issues/queries\n");
    }

    #[test]
    fn test_emit_nested_fragments() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&vec![
            CodeFragment::comment("section"),
            CodeFragment::block(
                "{",
                vec![CodeFragment::indent(vec![CodeFragment::line("deep")])],
                Some("}".to_string()),
            ),
        ]);

        assert_eq!(builder.build(), "// section\n{\n    deep\n}\n");
    }

    #[test]
    fn test_push_api_tracks_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_line("a").push_indent().push_line("b");
        assert_eq!(builder.current_indent(), 1);
        assert_eq!(builder.as_str(), "a\n\tb\n");
    }
}
