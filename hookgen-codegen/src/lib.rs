//! Shared code generation utilities for hookgen.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific generators (e.g., `hookgen-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Grouping, name planning, output layout and file writing
//! - [`language`] - Language-specific abstractions (Generator, NamingConvention, etc.)

pub mod builder;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{GenerateResult, Generator, NamingConvention, PreviewFile, Rendered, TypeMapper};

/// Text of the banner placed at the top of every generated file.
pub const GENERATED_NOTICE: &str = "This file is generated by hookgen. Do not edit it by hand.";
