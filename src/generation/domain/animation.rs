//! Animation library selection.

use super::GenerationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Animation library the generated component is scaffolded for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationLibrary {
    /// Declarative entrance animations with `framer-motion`.
    #[default]
    Framer,
    /// Imperative timeline animations with `gsap`, run from a layout effect.
    Gsap,
}

impl AnimationLibrary {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Framer => "framer",
            Self::Gsap => "gsap",
        }
    }
}

impl fmt::Display for AnimationLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AnimationLibrary {
    type Error = GenerationDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "framer" => Ok(Self::Framer),
            "gsap" => Ok(Self::Gsap),
            _ => Err(GenerationDomainError::UnknownAnimation(value.to_owned())),
        }
    }
}
