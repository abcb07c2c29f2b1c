//! TypeScript type mapper implementation.

use hookgen_codegen::TypeMapper;
use hookgen_ir::ArgType;

use crate::ast::string_literal;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_arg_type(&self, ty: &ArgType) -> String {
        match ty {
            ArgType::String => "string".to_string(),
            ArgType::Number => "number".to_string(),
            ArgType::BigInt => "bigint".to_string(),
            ArgType::Boolean => "boolean".to_string(),
            ArgType::Null => "null".to_string(),
            ArgType::Bytes => "ArrayBuffer".to_string(),
            ArgType::Any => "any".to_string(),
            ArgType::Literal(text) => text.clone(),
            ArgType::Id(table) => format!("Id<{}>", string_literal(table)),
            ArgType::Array(inner) => format!("{}[]", self.map_arg_type(inner)),
            ArgType::Unknown => "unknown".to_string(),
        }
    }

    fn map_optional_arg_type(&self, ty: &ArgType) -> String {
        format!("{} | null", self.map_arg_type(ty))
    }

    fn map_pending_id_type(&self, ty: &ArgType) -> String {
        format!("{} | null | undefined", self.map_arg_type(ty))
    }
}

/// Whether rendering `ty` needs the data model's `Id` type.
pub fn uses_id(ty: &ArgType) -> bool {
    match ty {
        ArgType::Id(_) => true,
        ArgType::Array(inner) => uses_id(inner),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typescript_arg_types() {
        let mapper = TypeScriptTypeMapper;

        assert_eq!(mapper.map_arg_type(&ArgType::String), "string");
        assert_eq!(mapper.map_arg_type(&ArgType::BigInt), "bigint");
        assert_eq!(mapper.map_arg_type(&ArgType::Bytes), "ArrayBuffer");
        assert_eq!(
            mapper.map_arg_type(&ArgType::Literal("\"open\"".into())),
            "\"open\""
        );
        assert_eq!(
            mapper.map_arg_type(&ArgType::Array(Box::new(ArgType::Id("tags".into())))),
            "Id<\"tags\">[]"
        );
    }

    #[test]
    fn test_typescript_optional_and_pending_types() {
        let mapper = TypeScriptTypeMapper;
        let id = ArgType::Id("projects".into());

        assert_eq!(
            mapper.map_optional_arg_type(&ArgType::Number),
            "number | null"
        );
        assert_eq!(
            mapper.map_pending_id_type(&id),
            "Id<\"projects\"> | null | undefined"
        );
        assert!(uses_id(&id));
        assert!(!uses_id(&ArgType::String));
    }
}
