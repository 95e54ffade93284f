//! AS-SET name key type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of an AS-SET, e.g. `AS1299:AS-TWELVE99`.
///
/// Names are compared byte-for-byte: case matters, surrounding whitespace
/// matters. `"AS-TEST"` and `"as-test"` are distinct keys, and so is
/// `"AS-TEST "`. The empty string is a valid, ordinary key with no special
/// meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetName(String);

impl SetName {
    /// Create a set name from a raw string, exactly as published.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SetName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SetName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
