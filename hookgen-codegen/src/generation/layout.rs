//! Output files of a layout.

use std::collections::HashSet;

use hookgen_ir::{FunctionDescriptor, Namespace, OutputLayout};

use super::{group_by_top_level, sections};

/// How a file gathers its functions, which decides name qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStyle {
    /// One file per top-level namespace.
    Grouped,
    /// One file per full namespace.
    Split,
}

/// One planned output file.
#[derive(Debug, Clone)]
pub struct LayoutFile<'a> {
    /// File name without extension.
    pub stem: String,
    pub style: FileStyle,
    /// Members sorted by namespace, then name.
    pub functions: Vec<&'a FunctionDescriptor>,
}

impl<'a> LayoutFile<'a> {
    /// Runs of functions sharing one full namespace.
    pub fn sections(&self) -> Vec<(&'a Namespace, Vec<&'a FunctionDescriptor>)> {
        sections(&self.functions)
    }
}

/// Plan the files of `layout` for the given functions.
///
/// Under [`OutputLayout::Both`] grouped files come first, and a split file
/// whose stem equals a grouped one is dropped.
pub fn plan_files<'a>(
    functions: impl IntoIterator<Item = &'a FunctionDescriptor>,
    layout: OutputLayout,
) -> Vec<LayoutFile<'a>> {
    let groups = group_by_top_level(functions);
    let mut files = Vec::new();

    if layout.includes_grouped() {
        for (top_level, members) in &groups {
            files.push(LayoutFile {
                stem: top_level.to_string(),
                style: FileStyle::Grouped,
                functions: members.clone(),
            });
        }
    }

    if layout.includes_split() {
        let taken: HashSet<String> = files.iter().map(|f| f.stem.clone()).collect();
        for members in groups.values() {
            for (namespace, section) in sections(members) {
                let stem = namespace.segments().collect::<Vec<_>>().join("-");
                if taken.contains(&stem) {
                    continue;
                }
                files.push(LayoutFile {
                    stem,
                    style: FileStyle::Split,
                    functions: section,
                });
            }
        }
    }

    files
}
