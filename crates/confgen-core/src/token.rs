//! Random token generation.

use crate::error::{GenerateError, Result};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters allowed in node and attribute names.
pub const NAME_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Characters drawn for attribute values: names plus punctuation, without
/// the notation's own brackets and quotes.
pub const VALUE_CHARS: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_",
    " !@#$%^&*(){};:,./<>?|`~"
);

/// A non-empty set of characters to sample from.
///
/// Serialized as a plain string. Repeated characters are kept and weight the
/// draw accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Build a charset from the characters of `chars`.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(GenerateError::config("charset", "must not be empty"));
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// The narrow charset used for names.
    pub fn names() -> Self {
        Self {
            chars: NAME_CHARS.chars().collect(),
        }
    }

    /// The wide charset used for attribute values.
    pub fn values() -> Self {
        Self {
            chars: VALUE_CHARS.chars().collect(),
        }
    }

    /// Number of characters (never zero).
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at `index`. Panics if out of range.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// Iterate over the characters.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl TryFrom<String> for Charset {
    type Error = GenerateError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Charset> for String {
    fn from(charset: Charset) -> Self {
        charset.chars.into_iter().collect()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// An inclusive length range for generated tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    /// Shortest token, at least 1.
    pub min: usize,
    /// Longest token.
    pub max: usize,
}

impl LengthRange {
    /// Create a range `min..=max`.
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check `1 <= min <= max`.
    pub fn validate(&self, field: &'static str) -> Result<()> {
        if self.min == 0 {
            return Err(GenerateError::config(
                field,
                "minimum length must be at least 1",
            ));
        }
        if self.min > self.max {
            return Err(GenerateError::config(
                field,
                format!("minimum {} exceeds maximum {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Generate a random token.
///
/// The length is drawn uniformly from `range`, then each character is drawn
/// independently from `charset`.
pub fn token<R: RandomSource + ?Sized>(
    rng: &mut R,
    range: LengthRange,
    charset: &Charset,
) -> String {
    let len = rng.next_in_range(range.min, range.max);
    (0..len).map(|_| rng.next_char(charset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::scripted::Scripted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_token_respects_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(3);
        let charset = Charset::names();
        for _ in 0..500 {
            let t = token(&mut rng, LengthRange::new(1, 10), &charset);
            assert!((1..=10).contains(&t.chars().count()), "bad length: {t:?}");
            assert!(t.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }

    #[test]
    fn test_token_draw_order() {
        let charset = Charset::new("abc").unwrap();
        // length 3, then indices 2, 0, 1
        let mut rng = Scripted::new([3, 2, 0, 1]);
        assert_eq!(token(&mut rng, LengthRange::new(1, 5), &charset), "cab");
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_value_chars_exclude_delimiters() {
        for c in ['[', ']', '"', '\'', '\\', '=', '\t', '\n', '\r'] {
            assert!(!VALUE_CHARS.contains(c), "{c:?} must not be a value char");
        }
        assert!(VALUE_CHARS.contains(' '));
        assert!(VALUE_CHARS.starts_with(NAME_CHARS));
    }

    #[test]
    fn test_empty_charset_rejected() {
        assert!(Charset::new("").is_err());
    }

    #[test]
    fn test_charset_serde_as_string() {
        let charset = Charset::new("ab_").unwrap();
        let json = serde_json::to_string(&charset).unwrap();
        assert_eq!(json, "\"ab_\"");
        let back: Charset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, charset);
        assert!(serde_json::from_str::<Charset>("\"\"").is_err());
    }

    #[test]
    fn test_length_range_validation() {
        assert!(LengthRange::new(1, 1).validate("len").is_ok());
        assert!(LengthRange::new(0, 4).validate("len").is_err());
        assert!(LengthRange::new(5, 4).validate("len").is_err());
    }
}
