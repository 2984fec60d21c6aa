// src/parser.rs
//! Byte cursor over a template string. Used by the placeholder scanner in
//! `template` and by the scheme check when an engine url is constructed.

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidSyntax(String),
}

/// A `{name}`, `{name?}` or `{prefix:name?}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub prefix: Option<&'a str>,
    pub name: &'a str,
    pub optional: bool,
}

impl Placeholder<'_> {
    /// True for `{name}` or `{name?}` without a namespace prefix.
    pub fn is_bare(&self, name: &str) -> bool {
        self.prefix.is_none() && self.name == name
    }
}

pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn parse_identifier(&mut self) -> Result<&'a str, ParseError> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == '_' || c.is_ascii_alphanumeric() {
                self.i += 1;
            } else {
                break;
            }
        }
        if self.i == start {
            return Err(ParseError::InvalidSyntax("identifier expected".into()));
        }
        Ok(&self.s[start..self.i])
    }

    /// Reads a placeholder at the cursor. On failure the cursor is left
    /// where it was.
    pub fn parse_placeholder(&mut self) -> Option<Placeholder<'a>> {
        let start = self.i;
        let parsed = self.placeholder_inner();
        if parsed.is_err() {
            self.i = start;
        }
        parsed.ok()
    }

    fn placeholder_inner(&mut self) -> Result<Placeholder<'a>, ParseError> {
        self.expect('{')?;
        let first = self.parse_identifier()?;
        let (prefix, name) = if self.consume_char(':') {
            (Some(first), self.parse_identifier()?)
        } else {
            (None, first)
        };
        let optional = self.consume_char('?');
        self.expect('}')?;
        Ok(Placeholder { prefix, name, optional })
    }

    /// Reads an RFC 3986 scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
    /// followed by `:`, returned lower-cased.
    pub fn parse_scheme(&mut self) -> Result<String, ParseError> {
        let start = self.i;
        match self.peek_char() {
            Some(c) if c.is_ascii_alphabetic() => self.i += 1,
            _ => return Err(ParseError::InvalidSyntax("scheme expected".into())),
        }
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') {
                self.i += 1;
            } else {
                break;
            }
        }
        let scheme = self.s[start..self.i].to_ascii_lowercase();
        self.expect(':')?;
        Ok(scheme)
    }

    pub fn expect(&mut self, c: char) -> Result<(), ParseError> {
        if self.consume_char(c) {
            Ok(())
        } else {
            Err(ParseError::InvalidSyntax(format!("expected '{}'", c)))
        }
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Moves past the next char and returns it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Consumes everything up to (not including) the next `c`, or to the end.
    pub fn take_until(&mut self, c: char) -> &'a str {
        let start = self.i;
        let len = self.s[start..].find(c).unwrap_or(self.s.len() - start);
        self.i += len;
        &self.s[start..self.i]
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
