//! Output planning and file management.
//!
//! - [`group_by_top_level`] / [`sections`] - Namespace grouping
//! - [`plan_files`] - Output files for a [`OutputLayout`](hookgen_ir::OutputLayout)
//! - [`NamePlan`] / [`SeenNames`] - Collision-free binding names
//! - [`ExportLedger`] - Duplicate export detection across one barrel
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`FileRegistry`] - Full-overwrite writing of generated files

mod exports;
mod grouping;
mod imports;
mod layout;
mod plan;
mod registry;

pub use exports::ExportLedger;
pub use grouping::{group_by_top_level, sections};
pub use imports::ImportCollector;
pub use layout::{FileStyle, LayoutFile, plan_files};
pub use plan::{NamePlan, SeenNames, clean_segment};
pub use registry::{FileRegistry, WriteStats};
