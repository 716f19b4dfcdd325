//! String enum modules.

use typebind_codegen::RenderContext;
use typebind_ir::EnumDescriptor;

use super::header;

/// A module holding one generated `str`-valued enum.
pub struct EnumPy<'a> {
    enumeration: &'a EnumDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> EnumPy<'a> {
    pub fn new(enumeration: &'a EnumDescriptor, ctx: &'a RenderContext) -> Self {
        Self { enumeration, ctx }
    }

    pub fn render(&self) -> String {
        let values = &self.enumeration.values;

        header(self.ctx.year)
            .line("from enum import Enum")
            .blank()
            .blank()
            .block(
                &format!("class {}(str, Enum):", self.enumeration.name),
                |b| {
                    b.when(values.is_empty(), |b| b.line("pass"))
                        .each(values, |b, value| b.line(&format!("{} = \"{}\"", value, value)))
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use typebind_schema::OutputType;

    use super::*;

    fn render(name: &str, values: &[&str]) -> String {
        let enumeration = EnumDescriptor {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        };
        EnumPy::new(&enumeration, &RenderContext::new(2024, OutputType::Class)).render()
    }

    #[test]
    fn test_enum_module() {
        assert_eq!(
            render("Color", &["RED", "GREEN"]),
            "# Generated by typebind (2024). Do not edit by hand.\n\
             \n\
             from enum import Enum\n\
             \n\
             \n\
             class Color(str, Enum):\n    RED = \"RED\"\n    GREEN = \"GREEN\"\n"
        );
    }

    #[test]
    fn test_enum_without_constants() {
        assert!(render("Empty", &[]).ends_with("class Empty(str, Enum):\n    pass\n"));
    }
}
