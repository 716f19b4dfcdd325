//! Parser for declared field types.
//!
//! Grammar:
//!
//! ```text
//! type     := wildcard | name args? dims
//! wildcard := '?' (('extends' | 'super') type)?
//! name     := ident ('.' ident)*
//! args     := '<' type (',' type)* '>'
//! dims     := ('[' ']')*
//! ```
//!
//! Wildcards are only accepted inside an argument list. Names come back
//! exactly as written; qualifying simple names is the registry's job.

use typebind_ir::{QualifiedName, TypeRef};

/// A syntax error at a byte offset of the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExprError {
    pub offset: usize,
    pub reason: String,
}

impl TypeExprError {
    fn new(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            offset,
            reason: reason.into(),
        }
    }
}

/// Parse a type expression such as `java.util.List<? extends Gadget>[]`.
pub fn parse_type_expr(input: &str) -> Result<TypeRef, TypeExprError> {
    let mut parser = Parser { input, pos: 0 };
    let ty = parser.parse_type(false)?;
    parser.skip_ws();
    if parser.pos < input.len() {
        return Err(TypeExprError::new(parser.pos, "unexpected trailing input"));
    }
    Ok(ty)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn keyword(&mut self, kw: &str) -> bool {
        let rest = &self.input[self.pos..];
        let Some(after) = rest.strip_prefix(kw) else {
            return false;
        };
        if after.chars().next().is_none_or(|c| !is_ident_char(c)) {
            self.pos += kw.len();
            true
        } else {
            false
        }
    }

    fn parse_type(&mut self, in_args: bool) -> Result<TypeRef, TypeExprError> {
        self.skip_ws();
        let start = self.pos;

        if self.eat('?') {
            if !in_args {
                return Err(TypeExprError::new(
                    start,
                    "wildcards are only allowed as type arguments",
                ));
            }
            self.skip_ws();
            if self.keyword("extends") {
                let upper = self.parse_type(true)?;
                return Ok(TypeRef::extends(upper));
            }
            if self.keyword("super") {
                // Lower bounds carry no usable element type.
                self.parse_type(true)?;
            }
            return Ok(TypeRef::wildcard());
        }

        let name = self.parse_name()?;
        self.skip_ws();

        let mut ty = if self.eat('<') {
            let mut args = Vec::new();
            loop {
                args.push(self.parse_type(true)?);
                self.skip_ws();
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(TypeExprError::new(self.pos, "expected ',' or '>'"));
            }
            TypeRef::Parameterized { raw: name, args }
        } else {
            TypeRef::Named(name)
        };

        loop {
            self.skip_ws();
            if !self.eat('[') {
                break;
            }
            self.skip_ws();
            if !self.eat(']') {
                return Err(TypeExprError::new(self.pos, "expected ']'"));
            }
            ty = TypeRef::array(ty);
        }

        Ok(ty)
    }

    fn parse_name(&mut self) -> Result<QualifiedName, TypeExprError> {
        let start = self.pos;
        loop {
            match self.peek() {
                Some(c) if is_ident_start(c) => {
                    while self.peek().is_some_and(is_ident_char) {
                        self.bump();
                    }
                }
                _ => return Err(TypeExprError::new(self.pos, "expected a type name")),
            }
            if !self.eat('.') {
                break;
            }
        }
        Ok(QualifiedName::parse(&self.input[start..self.pos]))
    }
}
