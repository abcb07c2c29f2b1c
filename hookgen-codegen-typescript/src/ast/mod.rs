//! TypeScript AST builders for imports, exports, declarations and types.
//!
//! Nodes implement [`Renderable`](hookgen_codegen::Renderable) and are
//! assembled into files by [`CodeFile`](crate::CodeFile).

mod arrow;
mod exports;
mod imports;
mod objects;
mod types;

pub use arrow::{ArrowConst, Param};
pub use exports::Export;
pub use imports::Import;
pub use objects::{ConstObject, Entry};
pub use types::{TypeAlias, string_literal, union};
