//! # Coordinates
//!
//! `group:artifact[:version]` shorthand, as printed by build tools.

use std::str::FromStr;

use crate::config::COORDINATE_SEPARATOR;
use crate::error::ValidationError;
use crate::group::GroupId;

/// A parsed `group:artifact[:version]` coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    /// The group id.
    pub group: GroupId,
    /// The artifact id.
    pub artifact: String,
    /// The version, when the coordinate names one.
    pub version: Option<String>,
}

impl Coordinate {
    /// Parse a coordinate string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCoordinate`] when the string does
    /// not have two or three non-empty parts, and
    /// [`ValidationError::InvalidGroupId`] when the group part is malformed.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidCoordinate {
            value: value.to_owned(),
            reason: reason.to_owned(),
        };

        let parts: Vec<&str> = value.split(COORDINATE_SEPARATOR).collect();
        let (group, artifact, version) = match parts.as_slice() {
            [group, artifact] => (*group, *artifact, None),
            [group, artifact, version] => (*group, *artifact, Some(*version)),
            [_] => return Err(invalid("missing artifact id")),
            _ => return Err(invalid("expected group:artifact[:version]")),
        };
        if artifact.is_empty() {
            return Err(invalid("empty artifact id"));
        }
        if version.is_some_and(str::is_empty) {
            return Err(invalid("empty version"));
        }

        Ok(Self {
            group: GroupId::parse(group)?,
            artifact: artifact.to_owned(),
            version: version.map(str::to_owned),
        })
    }
}

impl FromStr for Coordinate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{COORDINATE_SEPARATOR}{}", self.group, self.artifact)?;
        if let Some(version) = &self.version {
            write!(f, "{COORDINATE_SEPARATOR}{version}")?;
        }
        Ok(())
    }
}
