//! Method record type
//!
//! A method is a named installable unit (e.g. a database extension module)
//! that may declare dependencies on other methods by name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, invalid_method};

/// A method record as supplied by the loading layer
///
/// Only `name` and `depends` are meaningful to the resolver. Every other
/// field of the source record is captured in `extra` and passed through
/// reordering untouched; the resolver never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name, unique within the set
    pub name: String,

    /// Names of methods that must be installed before this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,

    /// Opaque payload fields carried through resolution unchanged
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Method {
    /// Create a method with no dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            depends: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Create a method with the given dependencies
    pub fn with_depends<I, S>(name: impl Into<String>, depends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            depends: depends.into_iter().map(Into::into).collect(),
            extra: BTreeMap::new(),
        }
    }

    /// Validate the record
    ///
    /// Intended for the loading layer, right after deserialization. The
    /// resolver itself assumes well-formed records and does not call this.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(invalid_method("Method name cannot be empty"));
        }

        for dep in &self.depends {
            if dep.is_empty() {
                return Err(invalid_method(format!(
                    "Method '{}' declares an empty dependency name",
                    self.name
                )));
            }
        }

        Ok(())
    }

    /// Check if this method declares no dependencies
    pub fn is_leaf(&self) -> bool {
        self.depends.is_empty()
    }
}
