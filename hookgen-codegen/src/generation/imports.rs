//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// # Example
///
/// ```
/// use hookgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("convex/react", "useQuery");
/// imports.add("@/convex/_generated/api", "api");
/// imports.add("convex/react", "useMutation");
///
/// let modules: Vec<_> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, vec!["convex/react", "@/convex/_generated/api"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("convex/react", "useQuery");
        imports.add("convex/react", "useQuery");
        imports.add("convex/server", "FunctionReference");

        assert!(imports.has_module("convex/react"));
        assert!(imports.has_symbol("convex/react", "useQuery"));
        assert!(!imports.has_symbol("convex/react", "useAction"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_symbols_are_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("convex/react", "useQuery");
        imports.add("convex/react", "useMutation");

        let (_, symbols) = imports.iter().next().unwrap();
        let symbols: Vec<_> = symbols.iter().map(String::as_str).collect();
        assert_eq!(symbols, vec!["useMutation", "useQuery"]);
    }
}
