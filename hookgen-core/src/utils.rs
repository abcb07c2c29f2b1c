//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// Segments are split on `_` and `-`; the remainder of each segment keeps its
/// casing, so camelCase input becomes PascalCase ("userProfiles" -> "UserProfiles").
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-']).map(upper_first).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld").
pub fn to_camel_case(s: &str) -> String {
    lower_first(&to_pascal_case(s))
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Derive a singular entity name from a plural table name.
///
/// This is a suffix heuristic, not an English inflector:
/// "-ies" becomes "-y", "-ses" drops "es", a trailing "s" not preceded by
/// another "s" is dropped, anything else is returned unchanged.
pub fn singularize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{}y", stem)
    } else if let Some(stem) = name.strip_suffix("ses") {
        format!("{}s", stem)
    } else if name.ends_with('s') && !name.ends_with("ss") {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}

/// Whether `s` can be used as a bare JavaScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("userProfiles"), "UserProfiles");
        assert_eq!(to_pascal_case("user-settings"), "UserSettings");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("user-settings"), "userSettings");
        assert_eq!(to_camel_case("issues"), "issues");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize("staff"), "staff");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("issues"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(!is_identifier("user-settings"));
        assert!(!is_identifier("2fa"));
        assert!(!is_identifier(""));
    }
}
