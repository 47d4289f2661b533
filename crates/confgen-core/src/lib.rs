//! Random fixture generation for the bracket configuration notation.
//!
//! A fixture is one bracketed tree:
//!
//! ```text
//! node  := "[" name (ws attr)* (ws node)* "]"
//! attr  := name "=" value
//! value := bareword | quoted-string
//! ```
//!
//! This crate provides the pieces that produce such documents:
//!
//! - [`escape_value`] - quote attribute values that cannot appear bare
//! - [`token`] and [`Charset`] - random names and values
//! - [`build_attributes`] - a node's `name=value` list
//! - [`generate`] and [`TreeBuilder`] - budgeted, depth-limited trees
//! - [`next_fixture_name`] and [`write_fixture`] - gap-filling `test_N.conf` numbering
//!
//! # Example
//!
//! ```
//! use confgen_core::{generate, GeneratorConfig, TreeLimits};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let limits = TreeLimits::new(20, 4).unwrap();
//! let doc = generate(&mut rng, &GeneratorConfig::default(), limits);
//!
//! assert!(doc.text.starts_with('[') && doc.text.ends_with(']'));
//! assert!(doc.nodes >= 1 && doc.nodes <= 20);
//! assert!(doc.deepest < 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attrs;
pub mod config;
pub mod error;
pub mod escape;
pub mod numbering;
pub mod rng;
pub mod token;
pub mod tree;

pub use attrs::{build_attributes, Attributes};
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use escape::{escape_value, needs_quoting, quote_char};
pub use numbering::{
    fixture_name, lowest_free, next_fixture_name, parse_fixture_number, write_fixture,
    AllocationMode,
};
pub use rng::RandomSource;
pub use token::{token, Charset, LengthRange, NAME_CHARS, VALUE_CHARS};
pub use tree::{generate, Generated, NodeBudget, TreeBuilder, TreeLimits};
