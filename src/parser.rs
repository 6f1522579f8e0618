//! Recursive-descent implementation of the JSON grammar.
//!
//! Dispatch is LL(1): every value type has a unique lead character or
//! character class, so one `peek` decides the production and no
//! backtracking is ever needed. The scanner owns cursor movement; this
//! module owns the grammar and the nesting-depth guard.

use crate::error::Error;
use crate::scanner::{describe, Scanner};
use crate::token::{self, MAX_DEPTH};
use crate::value::{Map, Value};
use crate::Result;

pub(crate) fn parse_document(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    parser.scanner.skip_whitespace();

    let start = parser.scanner.offset();
    let root = parser.parse_value()?;

    // Historical JSON: the document root must be a container.
    if !root.is_object() && !root.is_array() {
        return Err(Error::syntax(
            start,
            format!(
                "top-level value must be an object or array, not {}",
                root.type_name()
            ),
        ));
    }

    if parser.scanner.has_more() {
        return Err(Error::syntax(
            parser.scanner.offset(),
            format!(
                "unexpected trailing token {}",
                describe(parser.scanner.peek())
            ),
        ));
    }

    Ok(root)
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            depth: 0,
        }
    }

    /// Every `parse_*` production leaves the cursor on the first
    /// non-whitespace character after the value it consumed.
    fn parse_value(&mut self) -> Result<Value> {
        match self.scanner.peek() {
            token::BEGIN_OBJECT => self.parse_object(),
            token::BEGIN_ARRAY => self.parse_array(),
            token::QUOTE => self.parse_string().map(Value::String),
            't' => self.parse_literal("true").map(|()| Value::Bool(true)),
            'f' => self.parse_literal("false").map(|()| Value::Bool(false)),
            'n' => self.parse_literal("null").map(|()| Value::Null),
            ch if token::is_number_start(ch) => self.parse_number(),
            ch => Err(Error::syntax(
                self.scanner.offset(),
                format!("unexpected token {}", describe(ch)),
            )),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        // Depth moves by exactly one across this call, error paths included.
        self.depth += 1;
        let result = self.parse_object_members();
        self.depth -= 1;
        result
    }

    fn parse_object_members(&mut self) -> Result<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::depth_exceeded(self.scanner.offset()));
        }

        self.scanner.expect(token::BEGIN_OBJECT, true)?;

        let mut members = Map::new();
        if self.scanner.peek() == token::END_OBJECT {
            self.scanner.expect(token::END_OBJECT, true)?;
            return Ok(Value::Object(members));
        }

        loop {
            let (key, value) = self.parse_member()?;
            // Duplicate keys silently overwrite the earlier value, the way
            // most JSON libraries behave.
            members.insert(key, value);

            match self.scanner.peek() {
                token::COMMA => self.scanner.expect(token::COMMA, true)?,
                token::END_OBJECT => {
                    self.scanner.expect(token::END_OBJECT, true)?;
                    return Ok(Value::Object(members));
                }
                ch => {
                    return Err(Error::syntax(
                        self.scanner.offset(),
                        format!("expected ',' or '}}' but found {}", describe(ch)),
                    ));
                }
            }
        }
    }

    /// One `key : value` member. A comma must be followed by another
    /// member, so a trailing comma fails here on the missing quote.
    fn parse_member(&mut self) -> Result<(String, Value)> {
        let key = self.parse_string()?;
        self.scanner.expect(token::COLON, true)?;
        let value = self.parse_value()?;
        Ok((key, value))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.depth += 1;
        let result = self.parse_array_elements();
        self.depth -= 1;
        result
    }

    fn parse_array_elements(&mut self) -> Result<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::depth_exceeded(self.scanner.offset()));
        }

        self.scanner.expect(token::BEGIN_ARRAY, true)?;

        let mut elements = Vec::new();
        if self.scanner.peek() == token::END_ARRAY {
            self.scanner.expect(token::END_ARRAY, true)?;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);

            match self.scanner.peek() {
                token::COMMA => self.scanner.expect(token::COMMA, true)?,
                token::END_ARRAY => {
                    self.scanner.expect(token::END_ARRAY, true)?;
                    return Ok(Value::Array(elements));
                }
                ch => {
                    return Err(Error::syntax(
                        self.scanner.offset(),
                        format!("expected ',' or ']' but found {}", describe(ch)),
                    ));
                }
            }
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        self.scanner.expect(token::QUOTE, false)?;

        let mut decoded = String::new();
        loop {
            if self.scanner.at_end() {
                return Err(Error::syntax(self.scanner.offset(), "unterminated string"));
            }
            match self.scanner.peek() {
                token::QUOTE => break,
                token::ESCAPE => self.parse_escape(&mut decoded)?,
                ch if token::is_control(ch) => {
                    return Err(Error::syntax(
                        self.scanner.offset(),
                        "control characters must be escaped",
                    ));
                }
                ch => {
                    decoded.push(ch);
                    self.scanner.advance();
                }
            }
        }

        self.scanner.expect(token::QUOTE, true)?;
        Ok(decoded)
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        self.scanner.expect(token::ESCAPE, false)?;

        let ch = self.scanner.peek();
        if let Some(replacement) = token::escape_replacement(ch) {
            self.scanner.advance();
            out.push(replacement);
            return Ok(());
        }

        if ch == 'u' {
            self.scanner.advance();
            return self.parse_unicode_escape(out);
        }

        Err(Error::syntax(
            self.scanner.offset(),
            format!("invalid escape sequence '\\' followed by {}", describe(ch)),
        ))
    }

    /// Decode `\uXXXX`, combining a high/low surrogate pair across two
    /// consecutive escapes into one scalar value above U+FFFF.
    fn parse_unicode_escape(&mut self, out: &mut String) -> Result<()> {
        let escape_offset = self.scanner.offset();
        let unit = self.parse_hex_unit()?;

        let scalar = match unit {
            0xD800..=0xDBFF => {
                let pair_offset = self.scanner.offset();
                if self.scanner.peek() != token::ESCAPE {
                    return Err(Error::syntax(
                        pair_offset,
                        "unpaired high surrogate in \\u escape",
                    ));
                }
                self.scanner.advance();
                if self.scanner.peek() != 'u' {
                    return Err(Error::syntax(
                        pair_offset,
                        "unpaired high surrogate in \\u escape",
                    ));
                }
                self.scanner.advance();

                let low = self.parse_hex_unit()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::syntax(
                        pair_offset,
                        "expected low surrogate after high surrogate in \\u escape",
                    ));
                }
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(Error::syntax(
                    escape_offset,
                    "unpaired low surrogate in \\u escape",
                ));
            }
            _ => u32::from(unit),
        };

        let decoded = char::from_u32(scalar)
            .ok_or_else(|| Error::syntax(escape_offset, "invalid \\u escape"))?;
        out.push(decoded);
        Ok(())
    }

    /// Exactly four hex digits, parsed as a 16-bit code unit.
    fn parse_hex_unit(&mut self) -> Result<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let ch = self.scanner.peek();
            let digit = ch.to_digit(16).ok_or_else(|| {
                Error::syntax(
                    self.scanner.offset(),
                    format!("expected four hex digits in \\u escape, found {}", describe(ch)),
                )
            })?;
            unit = (unit << 4) | digit as u16;
            self.scanner.advance();
        }
        Ok(unit)
    }

    /// Match a fixed keyword character by character, so the error names
    /// the exact mismatched character and offset.
    fn parse_literal(&mut self, literal: &'static str) -> Result<()> {
        let mut chars = literal.chars().peekable();
        while let Some(ch) = chars.next() {
            let is_last = chars.peek().is_none();
            self.scanner.expect(ch, is_last)?;
        }
        Ok(())
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.scanner.offset();

        if self.scanner.peek() == '-' {
            self.scanner.advance();
        }

        // Integer part: a single zero, or a nonzero digit followed by any
        // run of digits. "01" is strict-JSON invalid.
        match self.scanner.peek() {
            '0' => {
                self.scanner.advance();
                if token::is_digit(self.scanner.peek()) {
                    return Err(Error::syntax(
                        self.scanner.offset(),
                        "leading zeros are not allowed",
                    ));
                }
            }
            ch if token::is_digit(ch) => {
                while token::is_digit(self.scanner.peek()) {
                    self.scanner.advance();
                }
            }
            ch => {
                return Err(Error::syntax(
                    self.scanner.offset(),
                    format!("expected digit but found {}", describe(ch)),
                ));
            }
        }

        if self.scanner.peek() == '.' {
            self.scanner.advance();
            self.parse_digit_run()?;
        }

        if token::is_exponent_marker(self.scanner.peek()) {
            self.scanner.advance();
            if token::is_sign(self.scanner.peek()) {
                self.scanner.advance();
            }
            self.parse_digit_run()?;
        }

        let span = self.scanner.slice(start, self.scanner.offset());
        let number = span
            .parse::<f64>()
            .map_err(|_| Error::syntax(start, format!("invalid number literal '{span}'")))?;

        self.scanner.skip_whitespace();
        Ok(Value::Number(number))
    }

    /// One or more digits (fraction and exponent parts).
    fn parse_digit_run(&mut self) -> Result<()> {
        if !token::is_digit(self.scanner.peek()) {
            return Err(Error::syntax(
                self.scanner.offset(),
                format!("expected digit but found {}", describe(self.scanner.peek())),
            ));
        }
        while token::is_digit(self.scanner.peek()) {
            self.scanner.advance();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[rstest::rstest]
    fn test_parse_empty_containers() {
        assert_eq!(parse_document("{}").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse_document("[]").unwrap(), Value::Array(Vec::new()));
        assert_eq!(parse_document("  { }  ").unwrap(), Value::Object(Map::new()));
    }

    #[rstest::rstest]
    fn test_parse_simple_object() {
        let value = parse_document(r#"{"key": "value", "n": -1.5e2}"#).unwrap();
        assert_eq!(value.get("key").and_then(Value::as_str), Some("value"));
        assert_eq!(value.get("n").and_then(Value::as_f64), Some(-150.0));
    }

    #[rstest::rstest]
    fn test_parse_nested_array() {
        let value = parse_document(r#"[null, true, false, [1, 2]]"#).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0], Value::Null);
        assert_eq!(items[1], Value::Bool(true));
        assert_eq!(items[2], Value::Bool(false));
        assert_eq!(
            items[3],
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
    }

    #[rstest::rstest]
    fn test_empty_input_is_syntax_error() {
        let err = parse_document("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.to_string().contains("end of input"));
    }

    #[rstest::rstest]
    fn test_bare_root_rejected() {
        for input in [r#""text""#, "12", "true", "false", "null"] {
            let err = parse_document(input).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Syntax, "input: {input}");
            assert!(
                err.message.contains("top-level value"),
                "input: {input}, message: {}",
                err.message
            );
        }
    }

    #[rstest::rstest]
    fn test_trailing_content_rejected_with_offset() {
        let err = parse_document(r#"{"a":1} garbage"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.offset, 8);
        assert!(err.message.contains("unexpected trailing token"));
    }

    #[rstest::rstest]
    fn test_misplaced_literal_character() {
        let err = parse_document("[tru]").unwrap_err();
        assert_eq!(err.to_string(), "expected 'e' but found ']' at offset 4");
    }

    #[rstest::rstest]
    fn test_depth_decrements_through_failure() {
        // Unclosed nesting errors out of several levels; a second use of
        // the same input must behave identically.
        assert!(parse_document("[[[{").is_err());
        assert!(parse_document("[[[{").is_err());
    }

    #[rstest::rstest]
    fn test_colon_required_between_key_and_value() {
        let err = parse_document(r#"{"a" 1}"#).unwrap_err();
        assert!(err.to_string().contains("expected ':'"));
    }

    #[rstest::rstest]
    fn test_member_separator_errors() {
        let err = parse_document(r#"{"a":1 "b":2}"#).unwrap_err();
        assert!(err.message.contains("expected ',' or '}'"));

        let err = parse_document("[1 2]").unwrap_err();
        assert!(err.message.contains("expected ',' or ']'"));
    }
}
