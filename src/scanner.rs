use crate::error::Error;
use crate::token::{self, EOF};
use crate::Result;

/// Cursor over the input buffer. The single source of truth for "what
/// character are we looking at, and how do we move past it" — no grammar
/// knowledge lives here.
///
/// The offset is a byte offset and always lands on a UTF-8 boundary (or
/// one past the end, where [`Scanner::peek`] reads the NUL sentinel).
pub(crate) struct Scanner<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Byte offset of the character currently under the cursor.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The character under the cursor, or the NUL sentinel at or past
    /// end-of-input. Never advances.
    pub fn peek(&self) -> char {
        let bytes = self.input.as_bytes();
        match bytes.get(self.offset) {
            Some(&byte) if byte.is_ascii() => byte as char,
            Some(_) => self.input[self.offset..].chars().next().unwrap_or(EOF),
            None => EOF,
        }
    }

    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Move past the character under the cursor. Does nothing at
    /// end-of-input.
    pub fn advance(&mut self) {
        let bytes = self.input.as_bytes();
        match bytes.get(self.offset) {
            Some(&byte) if byte.is_ascii() => self.offset += 1,
            Some(_) => {
                if let Some(ch) = self.input[self.offset..].chars().next() {
                    self.offset += ch.len_utf8();
                }
            }
            None => {}
        }
    }

    /// Consume the character under the cursor, failing if it is not
    /// `expected`. With `skip_trailing_whitespace`, additionally consumes
    /// the whitespace run that follows.
    pub fn expect(&mut self, expected: char, skip_trailing_whitespace: bool) -> Result<()> {
        let actual = self.peek();
        if actual != expected {
            return Err(Error::syntax(
                self.offset,
                format!("expected '{expected}' but found {}", describe(actual)),
            ));
        }
        self.advance();
        if skip_trailing_whitespace {
            self.skip_whitespace();
        }
        Ok(())
    }

    /// Consume a possibly empty whitespace run at the cursor.
    pub fn skip_whitespace(&mut self) {
        while token::is_whitespace(self.peek()) {
            self.advance();
        }
    }

    /// Skip whitespace, then report whether any input remains.
    pub fn has_more(&mut self) -> bool {
        self.skip_whitespace();
        !self.at_end()
    }

    /// The raw input between two byte offsets. Used to reconstruct a
    /// number literal from its matched span.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }
}

/// Render a character for an error message; the EOF sentinel reads as
/// "end of input" instead of an invisible NUL.
pub(crate) fn describe(ch: char) -> String {
    if ch == EOF {
        "end of input".to_string()
    } else {
        format!("'{ch}'")
    }
}
