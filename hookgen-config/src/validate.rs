//! Validation of configuration values that serde cannot check.

use miette::SourceSpan;
use regex::Regex;

use crate::{Error, Result};

/// Compile every skip pattern, pointing at the offending one on failure.
pub(crate) fn compile_patterns(patterns: &[String], src: &str, filename: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| {
                let reason = match e {
                    regex::Error::Syntax(_) => "not a valid regular expression".to_string(),
                    other => other.to_string(),
                };
                Error::invalid_pattern(pattern, reason, src, filename, find_value_span(src, pattern))
            })
        })
        .collect()
}

/// Reject empty import strings; they would produce `import ... from ""`.
pub(crate) fn non_empty(value: &str, key: &str, src: &str, filename: &str) -> Result<()> {
    if value.trim().is_empty() {
        let field = key.rsplit('.').next().unwrap_or(key);
        return Err(Error::validation(
            format!("{key} must not be empty"),
            src,
            filename,
            find_key_span(src, field),
        ));
    }
    Ok(())
}

/// Find the span of a quoted string value in the TOML source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    ['"', '\''].iter().find_map(|quote| {
        let needle = format!("{quote}{value}{quote}");
        src.find(&needle)
            .map(|offset| SourceSpan::from((offset, needle.len())))
    })
}

/// Find the span of a `key =` assignment in the TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
