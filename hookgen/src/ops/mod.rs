//! Core operations.
//!
//! This module contains the business logic for hookgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, Target, generate};
pub use list::list;

use hookgen_codegen_typescript::Settings;
use hookgen_config::Config;

/// Generator settings taken from a resolved config.
pub fn settings(config: &Config) -> Settings {
    Settings {
        layout: config.layout,
        structure: config.structure,
        api_import: config.api_import.clone(),
        data_model_import: config.data_model_import.clone(),
    }
}
