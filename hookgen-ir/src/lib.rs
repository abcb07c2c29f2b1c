//! Intermediate representation types for hookgen.
//!
//! These types are produced by `hookgen-parser` and consumed by the code
//! generators. They are build-time artifacts of a single generation run.
//!
//! # Architecture
//!
//! ```text
//! source tree → hookgen-parser (scan + extract) → hookgen-ir → generators
//! ```

mod function;
mod modes;
mod namespace;
mod schema;

pub use function::{ArgType, ArgumentDescriptor, FunctionDescriptor, FunctionKind};
pub use modes::{DeclarationStyle, OutputLayout, StructureMode};
pub use namespace::Namespace;
pub use schema::{MAIN_DOMAIN, ROOT_DOMAIN, SchemaFile, SourceFile, TableDescriptor};
