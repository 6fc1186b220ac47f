//! Validated visual source URL.

use super::GenerationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

const MAX_URL_LENGTH: usize = 2083;

/// Absolute `http`/`https` URL of a visual source (e.g. a Spline scene).
///
/// Stored in the normalised form produced by the URL parser, which is also
/// the form embedded in rendered code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceUrl(String);

impl SourceUrl {
    /// Parses and validates a source URL.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationDomainError::SourceUrlTooLong`] past 2083
    /// characters, [`GenerationDomainError::InvalidSourceUrl`] when the text
    /// is not an absolute URL, [`GenerationDomainError::UnsupportedUrlScheme`]
    /// for schemes other than `http` and `https`, or
    /// [`GenerationDomainError::MissingUrlHost`] when no host is present.
    pub fn parse(value: &str) -> Result<Self, GenerationDomainError> {
        let length = value.chars().count();
        if length > MAX_URL_LENGTH {
            return Err(GenerationDomainError::SourceUrlTooLong { length });
        }

        let parsed = Url::parse(value).map_err(|err| GenerationDomainError::InvalidSourceUrl {
            url: value.to_owned(),
            reason: err.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GenerationDomainError::UnsupportedUrlScheme(
                parsed.scheme().to_owned(),
            ));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(GenerationDomainError::MissingUrlHost(value.to_owned()));
        }

        Ok(Self(parsed.into()))
    }

    /// Returns the normalised URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
