//! Configuration for hookgen.
//!
//! Parses `hookgen.toml`, fills in defaults and validates it into a fully
//! resolved [`Config`] that the scanner, parser and generators consume as is.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod validate;

pub use config::{Config, ImportsSection, OutputSection, RawConfig, SourceSection};
pub use error::{Error, Result};
pub use file::ConfigFile;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hookgen.toml";
