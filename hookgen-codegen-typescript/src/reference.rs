//! Paths into the generated `api` reference object.

use std::iter;

use hookgen_core::is_identifier;
use hookgen_ir::FunctionDescriptor;

use crate::ast::string_literal;

/// Name of the reference object exported by the api module.
pub const API_OBJECT: &str = "api";

/// `api.issues.queries.list`; segments that are not identifiers use
/// bracket access (`api["user-settings"].get`).
pub fn reference_path(function: &FunctionDescriptor) -> String {
    let mut path = API_OBJECT.to_string();
    for segment in function
        .namespace
        .segments()
        .chain(iter::once(function.name.as_str()))
    {
        if is_identifier(segment) {
            path.push('.');
            path.push_str(segment);
        } else {
            path.push('[');
            path.push_str(&string_literal(segment));
            path.push(']');
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use hookgen_ir::{FunctionKind, Namespace};

    use super::*;

    #[test]
    fn test_dotted_path() {
        let f = FunctionDescriptor::new(
            "list",
            FunctionKind::Query,
            Namespace::new("issues/queries"),
            "issues/queries.ts",
        );
        assert_eq!(reference_path(&f), "api.issues.queries.list");
    }

    #[test]
    fn test_bracket_access_for_non_identifiers() {
        let f = FunctionDescriptor::new(
            "get",
            FunctionKind::Query,
            Namespace::new("user-settings/queries"),
            "user-settings/queries.ts",
        );
        assert_eq!(reference_path(&f), "api[\"user-settings\"].queries.get");
    }
}
