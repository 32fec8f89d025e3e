//! Cluster identifier type with lowercase normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// DB cluster identifier - newtype for type safety.
///
/// RDS compares cluster identifiers case-insensitively, so the inner
/// string is normalized to lowercase at construction. The inner String
/// is private to ensure all construction goes through [`ClusterId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId(String);

impl ClusterId {
    /// Create a new `ClusterId`, normalizing to lowercase.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_lowercase())
    }

    /// Get the cluster ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ClusterId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ClusterId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
