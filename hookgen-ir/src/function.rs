//! Function and argument descriptors.

use std::{fmt, path::PathBuf};

use serde::Serialize;

use crate::Namespace;

/// Kind of backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Query,
    Mutation,
    Action,
}

impl FunctionKind {
    pub const ALL: [FunctionKind; 3] = [Self::Query, Self::Mutation, Self::Action];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Action => "action",
        }
    }

    /// Plural directory / object suffix ("queries", "mutations", "actions").
    pub fn plural(self) -> &'static str {
        match self {
            Self::Query => "queries",
            Self::Mutation => "mutations",
            Self::Action => "actions",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic type of an argument, independent of the validator syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "of", rename_all = "lowercase")]
pub enum ArgType {
    String,
    Number,
    BigInt,
    Boolean,
    Null,
    Bytes,
    Any,
    /// A literal value, kept as its source text (e.g. `"active"`, `42`).
    Literal(String),
    /// Reference id of a document in the named table.
    Id(String),
    Array(Box<ArgType>),
    Unknown,
}

impl ArgType {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// One argument of a function, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ArgType,
    pub optional: bool,
    pub is_reference_id: bool,
    pub is_reference_id_array: bool,
    pub referenced_table: Option<String>,
}

impl ArgumentDescriptor {
    /// A plain argument of the given type.
    pub fn new(name: impl Into<String>, ty: ArgType) -> Self {
        let (is_reference_id, is_reference_id_array, referenced_table) = match &ty {
            ArgType::Id(table) => (true, false, Some(table.clone())),
            ArgType::Array(inner) => match inner.as_ref() {
                ArgType::Id(table) => (false, true, Some(table.clone())),
                _ => (false, false, None),
            },
            _ => (false, false, None),
        };
        Self {
            name: name.into(),
            ty,
            optional: false,
            is_reference_id,
            is_reference_id_array,
            referenced_table,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A registered backend function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDescriptor {
    pub name: String,
    pub kind: FunctionKind,
    pub namespace: Namespace,
    pub source_file: PathBuf,
    pub arguments: Vec<ArgumentDescriptor>,
    pub is_paginated: bool,
    pub uses_opaque_args: bool,
}

impl FunctionDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: FunctionKind,
        namespace: Namespace,
        source_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            namespace,
            source_file: source_file.into(),
            arguments: Vec::new(),
            is_paginated: false,
            uses_opaque_args: false,
        }
    }

    /// Mark the argument shape as unclassifiable. Never cleared afterwards.
    pub fn mark_opaque(&mut self) {
        self.uses_opaque_args = true;
    }

    pub fn required_args(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.arguments.iter().filter(|a| !a.optional)
    }

    pub fn optional_args(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.arguments.iter().filter(|a| a.optional)
    }

    /// Required scalar reference-id arguments; these gate query execution.
    pub fn required_ids(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.required_args().filter(|a| a.is_reference_id)
    }

    /// Sort key giving deterministic output order.
    pub fn sort_key(&self) -> (&Namespace, &str) {
        (&self.namespace, &self.name)
    }
}
