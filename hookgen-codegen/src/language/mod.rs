//! Language-specific abstractions.
//!
//! - [`Generator`] - Trait implemented by every output generator
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`TypeMapper`] - Argument type to language type mapping
//! - [`GenerateResult`] - Result of writing a generator's output
//! - [`PreviewFile`] - Generated file preview

mod generator;
mod naming;
mod type_mapper;

pub use generator::{GenerateResult, Generator, PreviewFile, Rendered};
pub use naming::NamingConvention;
pub use type_mapper::TypeMapper;
