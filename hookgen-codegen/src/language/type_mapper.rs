//! Mapping of argument types to target-language type expressions.

use hookgen_ir::ArgType;

/// Maps classified argument types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map an argument type to a type expression.
    fn map_arg_type(&self, ty: &ArgType) -> String;

    /// Map the type of an argument that may be omitted.
    fn map_optional_arg_type(&self, ty: &ArgType) -> String;

    /// Map the type of a reference id that may not be available yet.
    fn map_pending_id_type(&self, ty: &ArgType) -> String;
}
