//! Visual source kind.

use super::GenerationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of visual asset the generated component is built around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// A Spline scene embedded through `@splinetool/react-spline`.
    #[default]
    Spline,
    /// A three.js scene. Renders the same layout as having no visual source.
    Three,
}

impl SourceType {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spline => "spline",
            Self::Three => "three",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SourceType {
    type Error = GenerationDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "spline" => Ok(Self::Spline),
            "three" => Ok(Self::Three),
            _ => Err(GenerationDomainError::UnknownSourceType(value.to_owned())),
        }
    }
}
