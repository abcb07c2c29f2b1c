//! TypeScript binding generators for hookgen.
//!
//! Three independent generators turn the analysed backend into client code:
//!
//! - [`HooksGenerator`] writes `useXxx` wrappers under `queries/`,
//!   `mutations/` and `actions/`
//! - [`ApiGenerator`] writes objects of typed function references
//! - [`TypesGenerator`] writes `tables.ts` with document and id aliases
//!
//! Each writes a barrel `index.ts` and fully owns its output directory.
//!
//! ```ignore
//! use hookgen_codegen_typescript::{Generator, HooksGenerator, Settings};
//! use std::path::Path;
//!
//! let settings = Settings::default();
//! let generator = HooksGenerator::new(&analysis.functions, &settings);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("src/hooks"))?;
//! ```

mod code_file;
mod naming;
mod reference;
mod settings;
mod type_mapper;

pub mod ast;
pub mod files;
pub mod generators;

pub use code_file::{CodeFile, RawCode};
pub use generators::{ApiGenerator, HooksGenerator, TypesGenerator, hook_name};
pub use hookgen_codegen::{GenerateResult, Generator, PreviewFile};
pub use naming::TS_NAMING;
pub use reference::{API_OBJECT, reference_path};
pub use settings::Settings;
pub use type_mapper::{TypeScriptTypeMapper, uses_id};
