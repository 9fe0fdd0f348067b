//! # Group Identifiers
//!
//! [`GroupId`] is a validated dotted namespace (`org.apache.maven.plugins`).
//! Each segment maps to one directory level under the repository root.
//!
//! ## Validation
//!
//! The identifier must be non-empty and every segment between delimiters
//! must be non-empty. `""`, `"."`, `".org"`, `"org."`, and `"org..apache"`
//! are rejected at construction, so path resolution never sees a malformed
//! namespace.

use std::str::FromStr;

use crate::config::NAMESPACE_DELIMITER;
use crate::error::ValidationError;

/// A validated group id: an ordered, non-empty list of non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId {
    raw: String,
    segments: Vec<String>,
}

impl GroupId {
    /// Parse a dotted group id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidGroupId`] if the identifier is
    /// empty or contains an empty segment.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let segments: Vec<String> = value
            .split(NAMESPACE_DELIMITER)
            .map(str::to_owned)
            .collect();
        if segments.iter().any(String::is_empty) {
            return Err(ValidationError::InvalidGroupId(value.to_owned()));
        }
        Ok(Self {
            raw: value.to_owned(),
            segments,
        })
    }

    /// The identifier as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The namespace segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for GroupId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
