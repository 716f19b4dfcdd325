/// One level of indentation in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    unit: &'static str,
}

impl Indent {
    /// Two spaces, as emitted for TypeScript.
    pub const TWO_SPACES: Self = Self { unit: "  " };

    /// Four spaces, as required by PEP 8.
    pub const FOUR_SPACES: Self = Self { unit: "    " };

    pub const TAB: Self = Self { unit: "\t" };

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// Leading whitespace for `level` nested blocks.
    pub fn at(&self, level: usize) -> String {
        self.unit.repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR_SPACES
    }
}
