//! Collision-free binding names.
//!
//! Names are planned in two passes over every function that shares one
//! barrel: candidates are derived without a qualifier and counted per
//! top-level namespace, then only the functions whose candidate collides are
//! qualified with their sub-namespace. When the structure qualifier of two
//! colliding functions is the same, both fall back to every sub-segment.

use std::collections::{HashMap, HashSet};

use hookgen_ir::{FunctionDescriptor, Namespace, StructureMode};

use super::FileStyle;

const KIND_SUFFIXES: &[&str] = &["Queries", "Mutations", "Actions", "Query", "Mutation", "Action"];

/// The rename set of one barrel.
#[derive(Debug, Clone)]
pub struct NamePlan {
    structure: StructureMode,
    colliding: HashSet<(Namespace, String)>,
    /// Colliding functions qualified with every sub-segment.
    deep: HashSet<(Namespace, String)>,
}

fn plan_key(function: &FunctionDescriptor) -> (Namespace, String) {
    (function.namespace.clone(), function.name.clone())
}

impl NamePlan {
    /// Count the unqualified `candidate` of every function per top-level
    /// namespace and record the functions whose candidate is not unique.
    pub fn build<'a, F>(
        functions: impl IntoIterator<Item = &'a FunctionDescriptor>,
        structure: StructureMode,
        candidate: F,
    ) -> Self
    where
        F: Fn(&FunctionDescriptor) -> String,
    {
        let candidates: Vec<(&FunctionDescriptor, String)> = functions
            .into_iter()
            .map(|f| (f, candidate(f)))
            .collect();

        let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
        for (function, name) in &candidates {
            *counts
                .entry((function.namespace.top_level(), name.as_str()))
                .or_default() += 1;
        }

        let colliding: Vec<&(&FunctionDescriptor, String)> = candidates
            .iter()
            .filter(|(function, name)| {
                counts
                    .get(&(function.namespace.top_level(), name.as_str()))
                    .is_some_and(|&count| count > 1)
            })
            .collect();

        let mut qualified: HashMap<(&str, Vec<&str>, &str), usize> = HashMap::new();
        for (function, name) in &colliding {
            *qualified
                .entry(qualified_key(function, name, structure))
                .or_default() += 1;
        }
        let deep = colliding
            .iter()
            .filter(|(function, name)| {
                qualified
                    .get(&qualified_key(function, name, structure))
                    .is_some_and(|&count| count > 1)
            })
            .map(|(function, _)| plan_key(function))
            .collect();

        Self {
            structure,
            colliding: colliding.iter().map(|(function, _)| plan_key(function)).collect(),
            deep,
        }
    }

    pub fn is_colliding(&self, function: &FunctionDescriptor) -> bool {
        self.colliding.contains(&plan_key(function))
    }

    /// Segments to insert between prefix and function name.
    ///
    /// Split files always carry the full namespace path; grouped files only
    /// qualify colliding functions.
    pub fn qualifier<'f>(&self, function: &'f FunctionDescriptor, style: FileStyle) -> Vec<&'f str> {
        match style {
            FileStyle::Split => function.namespace.segments().collect(),
            FileStyle::Grouped if self.deep.contains(&plan_key(function)) => {
                function.namespace.sub_segments()
            }
            FileStyle::Grouped if self.is_colliding(function) => {
                function.namespace.qualifier(self.structure)
            }
            FileStyle::Grouped => Vec::new(),
        }
    }

    /// Number of functions that get a qualifier in grouped files.
    pub fn len(&self) -> usize {
        self.colliding.len()
    }
}

fn qualified_key<'f>(
    function: &'f FunctionDescriptor,
    candidate: &'f str,
    structure: StructureMode,
) -> (&'f str, Vec<&'f str>, &'f str) {
    (
        function.namespace.top_level(),
        function.namespace.qualifier(structure),
        candidate,
    )
}

/// Strip a trailing kind word from a namespace segment.
///
/// `adminQueries` becomes `admin`; a segment that is only a kind word
/// (`queries`) becomes empty.
pub fn clean_segment(segment: &str) -> &str {
    for suffix in KIND_SUFFIXES {
        if segment.eq_ignore_ascii_case(suffix) {
            return "";
        }
        if let Some(stem) = segment.strip_suffix(suffix) {
            return stem;
        }
    }
    segment
}

/// Names already used within one emitted scope.
#[derive(Debug, Clone, Default)]
pub struct SeenNames {
    seen: HashSet<String>,
}

impl SeenNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `candidate`; on a repeat try `fallback`, then append a number
    /// starting at 2.
    pub fn claim(&mut self, candidate: String, fallback: Option<String>) -> String {
        if self.seen.insert(candidate.clone()) {
            return candidate;
        }
        if let Some(fallback) = fallback
            && self.seen.insert(fallback.clone())
        {
            return fallback;
        }
        let mut n = 2;
        loop {
            let numbered = format!("{candidate}{n}");
            if self.seen.insert(numbered.clone()) {
                return numbered;
            }
            n += 1;
        }
    }
}
