//! Python type mapper implementation.

use typebind_codegen::TypeMapper;
use typebind_ir::QualifiedName;

/// Python type mapper implementation.
pub struct PythonTypeMapper;

impl TypeMapper for PythonTypeMapper {
    fn language(&self) -> &'static str {
        "python"
    }

    fn builtin(&self, ty: &QualifiedName) -> Option<&'static str> {
        let name = match ty.to_string().as_str() {
            "boolean" | "java.lang.Boolean" => "bool",
            "byte" | "short" | "int" | "long" => "int",
            "java.lang.Byte" | "java.lang.Short" | "java.lang.Integer" | "java.lang.Long" => "int",
            "java.math.BigInteger" => "int",
            "float" | "double" | "java.lang.Float" | "java.lang.Double" => "float",
            "java.lang.Number" | "java.math.BigDecimal" => "float",
            "char" | "java.lang.Character" | "java.lang.String" => "str",
            "java.net.URI" | "javax.xml.namespace.QName" | "javax.xml.datatype.Duration" => "str",
            "java.util.Date"
            | "java.util.Calendar"
            | "java.time.Instant"
            | "java.time.LocalDate"
            | "java.time.LocalDateTime"
            | "java.time.OffsetDateTime"
            | "java.time.ZonedDateTime"
            | "javax.xml.datatype.XMLGregorianCalendar" => "datetime",
            "java.lang.Object" => "object",
            _ => return None,
        };
        Some(name)
    }

    fn repeated(&self, element: &str) -> String {
        format!("List[{}]", element)
    }
}
