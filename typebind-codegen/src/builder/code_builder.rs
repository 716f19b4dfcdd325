use super::Indent;

/// Line-oriented source text with a running indentation level.
///
/// Consuming methods chain; the `push_` variants take `&mut self` for use
/// inside loops. Blank lines never carry trailing whitespace.
///
/// ```
/// use typebind_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::typescript()
///     .line("export enum Color {")
///     .indent()
///     .line("RED = \"RED\",")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "export enum Color {\n  RED = \"RED\",\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TWO_SPACES)
    }

    /// 4-space indentation.
    pub fn python() -> Self {
        Self::new(Indent::FOUR_SPACES)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.buffer.push_str(&self.indent.at(self.level));
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// `header`, the body one level deeper, then `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// `header` and the body one level deeper, for indentation-scoped languages.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Apply `f` once per item, in order.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }

}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
