//! Core utilities and types for hookgen.
//!
//! This crate provides the string helpers and file operations shared by the
//! parser and the code generators.

mod file;
mod utils;

// File operations
pub use file::{clean_generated, write_file};
// String utilities
pub use utils::{
    is_identifier, lower_first, singularize, to_camel_case, to_pascal_case, upper_first,
};
