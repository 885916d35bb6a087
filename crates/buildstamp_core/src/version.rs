//! Version strings with optional build metadata.

use std::fmt;

use crate::error::{StampError, StampResult};

/// Separator between the base version and its build metadata.
pub const BUILD_SEPARATOR: char = '+';

/// A version string split at its first `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    /// Everything before the first `+`, or the whole string.
    pub base: String,
    /// Everything after the first `+`, if present.
    pub build: Option<String>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Only the first `+` is significant: `1.0+a+b` has base `1.0` and build
    /// metadata `a+b`. A string with an empty base is rejected.
    pub fn parse(value: &str) -> StampResult<Self> {
        let (base, build) = match value.split_once(BUILD_SEPARATOR) {
            Some((base, build)) => (base, Some(build.to_string())),
            None => (value, None),
        };

        if base.trim().is_empty() {
            return Err(StampError::InvalidVersion {
                value: value.to_string(),
                message: "base version is empty".to_string(),
            });
        }

        Ok(Self {
            base: base.to_string(),
            build,
        })
    }

    /// Replace any existing build metadata.
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.build {
            Some(build) => write!(f, "{}{}{}", self.base, BUILD_SEPARATOR, build),
            None => f.write_str(&self.base),
        }
    }
}
