//! Generated TypeScript files.

mod api_ts;
mod hooks_ts;
mod index_ts;
mod tables_ts;

pub use api_ts::ApiTs;
pub use hooks_ts::{HookEntry, HookSection, HooksTs};
pub use index_ts::IndexTs;
pub use tables_ts::TablesTs;
