use std::path::PathBuf;

use thiserror::Error;

/// A file did not parse as TypeScript.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub line: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Errors that stop a scan entirely.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("source root '{0}' does not exist")]
    RootNotFound(PathBuf),

    #[error("source root '{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to walk '{path}'")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
