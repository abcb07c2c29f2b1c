//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how to transform namespace segments and argument names, and how
/// to handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a name into a type-like name (e.g., "user_profiles" -> "UserProfiles")
    pub to_type: fn(&str) -> String,
    /// Transform a name into a value-like name (e.g., "user_profiles" -> "userProfiles")
    pub to_value: fn(&str) -> String,
    /// Reserved words of the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "_class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a binding or parameter name.
    pub fn value_name(&self, name: &str) -> String {
        let transformed = (self.to_value)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use hookgen_core::{to_camel_case, to_pascal_case};

    use super::*;

    fn underscore(name: &str) -> String {
        format!("_{name}")
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        to_type: to_pascal_case,
        to_value: to_camel_case,
        reserved_words: &["default", "delete"],
        escape_reserved: underscore,
    };

    #[test]
    fn test_type_and_value_names() {
        assert_eq!(TEST_NAMING.type_name("user_profiles"), "UserProfiles");
        assert_eq!(TEST_NAMING.value_name("user-profiles"), "userProfiles");
    }

    #[test]
    fn test_reserved_names_are_escaped() {
        assert!(TEST_NAMING.is_reserved("default"));
        assert_eq!(TEST_NAMING.value_name("delete"), "_delete");
        assert_eq!(TEST_NAMING.safe_name("issues"), "issues");
    }
}
