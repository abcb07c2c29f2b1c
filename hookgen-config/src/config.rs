//! Raw `hookgen.toml` sections and the resolved [`Config`].

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use hookgen_ir::{DeclarationStyle, OutputLayout, StructureMode};
use regex::Regex;
use serde::Deserialize;

use crate::{Error, Result, validate};

/// `hookgen.toml` as written by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    pub source: SourceSection,
    pub output: OutputSection,
    pub imports: ImportsSection,
}

/// `[source]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSection {
    /// Root directory of the backend function files.
    pub root: PathBuf,
    pub structure: StructureMode,
    pub convention: DeclarationStyle,
    /// Schema file or directory, with or without the `.ts` extension.
    pub schema: PathBuf,
    /// Directory names pruned from the scan.
    pub skip_dirs: Vec<String>,
    /// Regular expressions matched against file names.
    pub skip_patterns: Vec<String>,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("convex"),
            structure: StructureMode::default(),
            convention: DeclarationStyle::default(),
            schema: PathBuf::from("convex/schema"),
            skip_dirs: vec!["_generated".to_string(), "node_modules".to_string()],
            skip_patterns: Vec::new(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub layout: OutputLayout,
    pub hooks: PathBuf,
    pub api: PathBuf,
    pub types: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            layout: OutputLayout::default(),
            hooks: PathBuf::from("src/generated/hooks"),
            api: PathBuf::from("src/generated/api"),
            types: PathBuf::from("src/generated/types"),
        }
    }
}

/// `[imports]` section. Values are used verbatim in generated `import` statements.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportsSection {
    pub api: String,
    pub data_model: String,
}

impl Default for ImportsSection {
    fn default() -> Self {
        Self {
            api: "@/convex/_generated/api".to_string(),
            data_model: "@/convex/_generated/dataModel".to_string(),
        }
    }
}

/// Fully resolved configuration.
///
/// Paths are resolved against the directory of the config file and skip
/// patterns are compiled.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub structure: StructureMode,
    pub convention: DeclarationStyle,
    pub schema: PathBuf,
    pub skip_dirs: Vec<String>,
    pub skip_patterns: Vec<Regex>,
    pub layout: OutputLayout,
    pub hooks_dir: PathBuf,
    pub api_dir: PathBuf,
    pub types_dir: PathBuf,
    pub api_import: String,
    pub data_model_import: String,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, crate::CONFIG_FILE_NAME, Path::new("."))
    }
}

impl Config {
    /// Parse and resolve a config with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        Self::resolve(raw, content, filename, base_dir)
    }

    /// Resolve a raw config, compiling patterns and anchoring relative paths.
    pub fn resolve(raw: RawConfig, src: &str, filename: &str, base_dir: &Path) -> Result<Self> {
        let skip_patterns = validate::compile_patterns(&raw.source.skip_patterns, src, filename)?;
        validate::non_empty(&raw.imports.api, "imports.api", src, filename)?;
        validate::non_empty(&raw.imports.data_model, "imports.data_model", src, filename)?;

        Ok(Self::build(raw, skip_patterns, base_dir))
    }

    fn build(raw: RawConfig, skip_patterns: Vec<Regex>, base_dir: &Path) -> Self {
        let anchor = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        };

        Self {
            root: anchor(&raw.source.root),
            structure: raw.source.structure,
            convention: raw.source.convention,
            schema: anchor(&raw.source.schema),
            skip_dirs: raw.source.skip_dirs,
            skip_patterns,
            layout: raw.output.layout,
            hooks_dir: anchor(&raw.output.hooks),
            api_dir: anchor(&raw.output.api),
            types_dir: anchor(&raw.output.types),
            api_import: raw.imports.api,
            data_model_import: raw.imports.data_model,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::build(RawConfig::default(), Vec::new(), Path::new("."))
    }
}
