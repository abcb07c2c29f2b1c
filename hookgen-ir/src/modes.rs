//! Run-wide mode switches selected by configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the function-source tree is organised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureMode {
    /// One level of sub-directories below the root.
    Flat,
    /// Arbitrary nesting.
    #[default]
    Nested,
}

/// Which declaration idiom the backend uses to register functions.
///
/// Selected once per run; a file is never parsed with both styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// `export const name = query({ args, handler })`
    #[default]
    Standard,
    /// `export const name = authedQuery.input({...}).handler(...).public()`
    Fluent,
}

/// Output file layout for the hooks and API generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// One file per top-level namespace.
    #[default]
    Grouped,
    /// One file per full namespace.
    Split,
    /// Both layouts side by side.
    Both,
}

impl OutputLayout {
    pub fn includes_grouped(self) -> bool {
        matches!(self, Self::Grouped | Self::Both)
    }

    pub fn includes_split(self) -> bool {
        matches!(self, Self::Split | Self::Both)
    }
}

impl fmt::Display for StructureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Nested => write!(f, "nested"),
        }
    }
}

impl fmt::Display for DeclarationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Fluent => write!(f, "fluent"),
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped => write!(f, "grouped"),
            Self::Split => write!(f, "split"),
            Self::Both => write!(f, "both"),
        }
    }
}
