//! Attribute value quoting.
//!
//! A value that contains whitespace, a quote or a bracket cannot appear bare
//! in the notation, so it is wrapped in quotes. Double quotes are preferred;
//! single quotes are used only when that avoids escaping (the value has a
//! `"` but no `'`). Inside the literal, backslashes are doubled first and
//! then the enclosing quote character is backslash-escaped. The other quote
//! character is left as is, which the reader accepts because only the
//! enclosing quote terminates a literal.

use std::borrow::Cow;

/// Characters that force a value to be quoted.
pub const SPECIAL_CHARS: &[char] = &[' ', '\t', '\n', '\r', '"', '\'', '[', ']'];

/// Returns `true` if `value` cannot be emitted as a bare word.
pub fn needs_quoting(value: &str) -> bool {
    value.contains(SPECIAL_CHARS)
}

/// Picks the enclosing quote for a value that needs quoting.
pub fn quote_char(value: &str) -> char {
    if value.contains('"') && !value.contains('\'') {
        '\''
    } else {
        '"'
    }
}

/// Escape an attribute value so it re-parses to the same string.
///
/// Values without special characters are returned borrowed and unchanged.
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if !needs_quoting(value) {
        return Cow::Borrowed(value);
    }

    let quote = quote_char(value);
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    // Backslashes must be doubled before the quote is escaped, so do both in
    // one pass where each input char maps to its own output.
    for c in value.chars() {
        if c == '\\' {
            out.push_str("\\\\");
        } else if c == quote {
            out.push('\\');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out.push(quote);
    Cow::Owned(out)
}
