//! String enum modules.

use typebind_codegen::RenderContext;
use typebind_ir::EnumDescriptor;

use super::header;

/// A module holding one generated string enum.
pub struct EnumTs<'a> {
    enumeration: &'a EnumDescriptor,
    ctx: &'a RenderContext,
}

impl<'a> EnumTs<'a> {
    pub fn new(enumeration: &'a EnumDescriptor, ctx: &'a RenderContext) -> Self {
        Self { enumeration, ctx }
    }

    pub fn render(&self) -> String {
        header(self.ctx.year)
            .block_with_close(
                &format!("export enum {} {{", self.enumeration.name),
                "}",
                |b| {
                    b.each(&self.enumeration.values, |b, value| {
                        b.line(&format!("{} = \"{}\",", value, value))
                    })
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use typebind_schema::OutputType;

    use super::*;

    #[test]
    fn test_enum_module() {
        let ctx = RenderContext::new(2024, OutputType::Class);
        let color = EnumDescriptor {
            name: "Color".to_string(),
            values: vec!["RED".to_string(), "GREEN".to_string()],
        };

        assert_eq!(
            EnumTs::new(&color, &ctx).render(),
            "// Generated by typebind (2024). Do not edit by hand.\n\
             \n\
             export enum Color {\n  RED = \"RED\",\n  GREEN = \"GREEN\",\n}\n"
        );
    }
}
