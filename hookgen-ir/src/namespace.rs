use std::fmt;

use serde::Serialize;

use crate::StructureMode;

/// Logical grouping path of a function, derived from its source location.
///
/// Segments are separated by `/`: `issues/queries` for `issues/queries.ts`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Build a namespace from path segments.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        Self(segments.into_iter().collect::<Vec<_>>().join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// First path segment.
    pub fn top_level(&self) -> &str {
        self.segments().next().unwrap_or("")
    }

    /// Segments after the top-level one.
    pub fn sub_segments(&self) -> Vec<&str> {
        self.segments().skip(1).collect()
    }

    /// Segments used to disambiguate colliding names inside a top-level group.
    ///
    /// Flat structures only tolerate one level of nesting, so the qualifier is
    /// the last segment; nested structures keep every sub-segment.
    pub fn qualifier(&self, structure: StructureMode) -> Vec<&str> {
        let subs = self.sub_segments();
        match structure {
            StructureMode::Flat => subs.last().copied().into_iter().collect(),
            StructureMode::Nested => subs,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_and_subs() {
        let ns = Namespace::new("issues/admin/queries");
        assert_eq!(ns.top_level(), "issues");
        assert_eq!(ns.sub_segments(), vec!["admin", "queries"]);
    }

    #[test]
    fn test_single_segment() {
        let ns = Namespace::new("users");
        assert_eq!(ns.top_level(), "users");
        assert!(ns.sub_segments().is_empty());
        assert!(ns.qualifier(StructureMode::Nested).is_empty());
    }

    #[test]
    fn test_qualifier_depends_on_structure() {
        let ns = Namespace::new("issues/admin/queries");
        assert_eq!(ns.qualifier(StructureMode::Flat), vec!["queries"]);
        assert_eq!(
            ns.qualifier(StructureMode::Nested),
            vec!["admin", "queries"]
        );
    }

    #[test]
    fn test_from_segments() {
        let ns = Namespace::from_segments(["a", "b", "c"]);
        assert_eq!(ns.as_str(), "a/b/c");
    }
}
