//! Barrel `index.ts` files.

use crate::{ast::Export, code_file::CodeFile};

/// A barrel re-exporting every generated file of one output directory.
#[derive(Debug, Default)]
pub struct IndexTs {
    exports: Vec<Export>,
}

impl IndexTs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-export one name from an external module before the file exports.
    pub fn reexport(mut self, name: &str, module: &str) -> Self {
        self.exports.push(Export::all(module).named(name));
        self
    }

    /// Re-export everything from a generated file, given its path without
    /// extension relative to the index.
    pub fn file(mut self, stem: &str) -> Self {
        self.exports.push(Export::all(format!("./{stem}")));
        self
    }

    pub fn render(self) -> String {
        CodeFile::new().exports(self.exports).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barrel() {
        let index = IndexTs::new()
            .reexport("api", "@/convex/_generated/api")
            .file("issues")
            .render();

        assert_eq!(
            index,
            "// This file is generated by hookgen. Do not edit it by hand.\n\nexport { api } from \"@/convex/_generated/api\";\nexport * from \"./issues\";\n"
        );
    }
}
