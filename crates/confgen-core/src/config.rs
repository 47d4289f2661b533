//! Generator configuration.

use crate::error::{GenerateError, Result};
use crate::token::{Charset, LengthRange};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for document generation.
///
/// The defaults reproduce the fixed shape of the fixture format: up to five
/// attributes and three children per node, names of 1-10 characters and
/// values of 1-30 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Upper bound on attributes per node.
    pub max_attributes: usize,
    /// Upper bound on children per node, before depth narrowing.
    pub max_children: usize,
    /// Length of node names.
    pub node_name_len: LengthRange,
    /// Length of attribute names.
    pub attr_name_len: LengthRange,
    /// Length of raw attribute values.
    pub attr_value_len: LengthRange,
    /// Characters for node and attribute names.
    pub name_charset: Charset,
    /// Characters for attribute values.
    pub value_charset: Charset,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attributes: 5,
            max_children: 3,
            node_name_len: LengthRange::new(1, 10),
            attr_name_len: LengthRange::new(1, 10),
            attr_value_len: LengthRange::new(1, 30),
            name_charset: Charset::names(),
            value_charset: Charset::values(),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a config from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|source| GenerateError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can produce a well-formed document.
    pub fn validate(&self) -> Result<()> {
        self.node_name_len.validate("node_name_len")?;
        self.attr_name_len.validate("attr_name_len")?;
        self.attr_value_len.validate("attr_value_len")?;

        if let Some(bad) = self
            .name_charset
            .iter()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(GenerateError::config(
                "name_charset",
                format!("{bad:?} is not allowed in names (only A-Z, a-z, 0-9 and _)"),
            ));
        }
        Ok(())
    }
}
