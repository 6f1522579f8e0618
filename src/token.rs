//! Character classification for the JSON grammar.
//!
//! Pure lookup functions: every predicate maps a single code point to its
//! grammatical role. Unrecognized input is never an error here; the caller
//! decides what an unexpected character means.

pub const BEGIN_OBJECT: char = '{';
pub const END_OBJECT: char = '}';
pub const BEGIN_ARRAY: char = '[';
pub const END_ARRAY: char = ']';
pub const COMMA: char = ',';
pub const COLON: char = ':';
pub const QUOTE: char = '"';
pub const ESCAPE: char = '\\';

/// Sentinel returned by the scanner at or past end-of-input.
/// Not whitespace, not a structural token, not a digit.
pub(crate) const EOF: char = '\0';

/// Maximum nesting level of objects and arrays. Checked before recursing
/// so adversarial input fails fast instead of exhausting the call stack.
pub const MAX_DEPTH: usize = 20;

#[inline]
pub fn is_structural_char(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | ',' | ':')
}

#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

#[inline]
pub fn is_sign(ch: char) -> bool {
    matches!(ch, '-' | '+')
}

#[inline]
pub fn is_exponent_marker(ch: char) -> bool {
    matches!(ch, 'e' | 'E')
}

#[inline]
pub fn is_number_start(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '-'
}

#[inline]
pub fn is_control(ch: char) -> bool {
    (ch as u32) < 0x20
}

/// Replacement character for a single-letter escape code, or `None` when
/// the character does not introduce a valid escape. `u` is not in this
/// table; the four-hex-digit form is decoded by the parser.
#[inline]
pub fn escape_replacement(ch: char) -> Option<char> {
    match ch {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}
