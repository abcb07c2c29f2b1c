//! Options shared by the TypeScript generators.

use hookgen_ir::{OutputLayout, StructureMode};

/// Options shared by the TypeScript generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub layout: OutputLayout,
    pub structure: StructureMode,
    /// Module that exports the `api` reference object, used verbatim.
    pub api_import: String,
    /// Module that exports `Doc` and `Id`, used verbatim.
    pub data_model_import: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: OutputLayout::default(),
            structure: StructureMode::default(),
            api_import: "@/convex/_generated/api".to_string(),
            data_model_import: "@/convex/_generated/dataModel".to_string(),
        }
    }
}
