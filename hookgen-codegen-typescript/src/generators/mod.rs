//! The three TypeScript generators.
//!
//! Each one writes its own output directory and does not depend on the
//! others.

mod api;
mod hooks;
mod types;

pub use api::ApiGenerator;
pub use hooks::{HooksGenerator, hook_name};
pub use types::TypesGenerator;

const EXTENSION: &str = "ts";
const INDEX_FILE: &str = "index.ts";
