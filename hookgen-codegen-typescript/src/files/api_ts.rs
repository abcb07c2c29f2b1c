//! One file of typed reference objects.

use crate::{
    ast::{ConstObject, Import},
    code_file::CodeFile,
    reference::API_OBJECT,
};

/// A file of `export const <group><Kind> = { ... } as const;` objects.
pub struct ApiTs<'a> {
    objects: Vec<ConstObject>,
    api_import: &'a str,
}

impl<'a> ApiTs<'a> {
    pub fn new(objects: Vec<ConstObject>, api_import: &'a str) -> Self {
        Self {
            objects,
            api_import,
        }
    }

    pub fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new(self.api_import).named(API_OBJECT))
            .import(
                Import::new("convex/server")
                    .named("FunctionReference")
                    .type_only(),
            )
            .add_all(&self.objects)
            .render()
    }
}
