//! Grouping of functions by namespace.

use std::collections::BTreeMap;

use hookgen_ir::{FunctionDescriptor, Namespace};

/// Group functions by top-level namespace.
///
/// Groups are keyed in sorted order and each group is sorted by full
/// namespace, then by function name.
pub fn group_by_top_level<'a>(
    functions: impl IntoIterator<Item = &'a FunctionDescriptor>,
) -> BTreeMap<&'a str, Vec<&'a FunctionDescriptor>> {
    let mut groups: BTreeMap<&str, Vec<&FunctionDescriptor>> = BTreeMap::new();
    for function in functions {
        groups
            .entry(function.namespace.top_level())
            .or_default()
            .push(function);
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
    groups
}

/// Split sorted functions into runs sharing one full namespace.
pub fn sections<'a>(
    functions: &[&'a FunctionDescriptor],
) -> Vec<(&'a Namespace, Vec<&'a FunctionDescriptor>)> {
    let mut sections: Vec<(&Namespace, Vec<&FunctionDescriptor>)> = Vec::new();
    for &function in functions {
        match sections.last_mut() {
            Some((namespace, members)) if *namespace == &function.namespace => {
                members.push(function)
            }
            _ => sections.push((&function.namespace, vec![function])),
        }
    }
    sections
}
