//! Attribute list generation.

use crate::config::GeneratorConfig;
use crate::escape::escape_value;
use crate::rng::RandomSource;
use crate::token::token;

/// A rendered attribute list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// `name=value` pairs joined by single spaces; empty when `count` is 0.
    pub rendered: String,
    /// Number of pairs in `rendered`.
    pub count: usize,
}

impl Attributes {
    /// Returns `true` if no attributes were generated.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Generate between 0 and `config.max_attributes` attributes.
///
/// Names come from the name charset, values from the value charset and are
/// escaped before being joined as `name=value`.
pub fn build_attributes<R: RandomSource + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Attributes {
    let count = rng.next_in_range(0, config.max_attributes);
    let mut rendered = String::new();

    for i in 0..count {
        let name = token(rng, config.attr_name_len, &config.name_charset);
        let value = token(rng, config.attr_value_len, &config.value_charset);
        if i > 0 {
            rendered.push(' ');
        }
        rendered.push_str(&name);
        rendered.push('=');
        rendered.push_str(&escape_value(&value));
    }

    Attributes { rendered, count }
}
