//! TypeScript naming conventions.

use hookgen_codegen::NamingConvention;
use hookgen_core::{to_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Types use PascalCase
    to_type: to_pascal_case,
    // Bindings and parameters use camelCase
    to_value: to_camel_case,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict-mode and contextual words invalid as parameter names
        "arguments",
        "await",
        "eval",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
    ],
    escape_reserved: escape_ts_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ts_naming_type() {
        assert_eq!(TS_NAMING.type_name("user_profiles"), "UserProfiles");
        assert_eq!(TS_NAMING.type_name("issues"), "Issues");
    }

    #[test]
    fn test_ts_naming_value() {
        assert_eq!(TS_NAMING.value_name("user-profiles"), "userProfiles");
        assert_eq!(TS_NAMING.value_name("Issues"), "issues");
    }

    #[test]
    fn test_ts_reserved_words() {
        assert!(TS_NAMING.is_reserved("class"));
        assert!(TS_NAMING.is_reserved("await"));
        assert!(!TS_NAMING.is_reserved("status"));
    }

    #[test]
    fn test_ts_escape_reserved() {
        assert_eq!(TS_NAMING.safe_name("default"), "_default");
        assert_eq!(TS_NAMING.safe_name("projectId"), "projectId");
    }
}
