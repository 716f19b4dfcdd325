//! TypeScript type mapper implementation.

use typebind_codegen::TypeMapper;
use typebind_ir::QualifiedName;

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn builtin(&self, ty: &QualifiedName) -> Option<&'static str> {
        let name = match ty.to_string().as_str() {
            "boolean" | "java.lang.Boolean" => "boolean",
            "byte" | "short" | "int" | "long" | "float" | "double" => "number",
            "java.lang.Byte" | "java.lang.Short" | "java.lang.Integer" | "java.lang.Long" => {
                "number"
            }
            "java.lang.Float" | "java.lang.Double" | "java.lang.Number" => "number",
            "java.math.BigInteger" | "java.math.BigDecimal" => "number",
            "char" | "java.lang.Character" | "java.lang.String" => "string",
            "java.net.URI" | "javax.xml.namespace.QName" | "javax.xml.datatype.Duration" => {
                "string"
            }
            "java.util.Date"
            | "java.util.Calendar"
            | "java.time.Instant"
            | "java.time.LocalDate"
            | "java.time.LocalDateTime"
            | "java.time.OffsetDateTime"
            | "java.time.ZonedDateTime"
            | "javax.xml.datatype.XMLGregorianCalendar" => "Date",
            "java.lang.Object" => "any",
            _ => return None,
        };
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(name: &str) -> String {
        TypeScriptTypeMapper.name_for(&QualifiedName::parse(name))
    }

    #[test]
    fn test_typescript_primitives() {
        assert_eq!(map("int"), "number");
        assert_eq!(map("java.lang.Long"), "number");
        assert_eq!(map("java.math.BigDecimal"), "number");
        assert_eq!(map("boolean"), "boolean");
        assert_eq!(map("java.lang.String"), "string");
        assert_eq!(map("java.net.URI"), "string");
    }

    #[test]
    fn test_typescript_dates_and_object() {
        assert_eq!(map("javax.xml.datatype.XMLGregorianCalendar"), "Date");
        assert_eq!(map("java.util.Date"), "Date");
        assert_eq!(map("java.lang.Object"), "any");
    }

    #[test]
    fn test_typescript_user_types_use_simple_name() {
        let link = QualifiedName::parse("com.vmware.vcloud.api.rest.schema.LinkType");
        assert!(!TypeScriptTypeMapper.is_builtin(&link));
        assert_eq!(TypeScriptTypeMapper.name_for(&link), "LinkType");
        assert_eq!(TypeScriptTypeMapper.repeated("LinkType"), "LinkType[]");
    }
}
