//! Error types for generation request validation and parsing.

use thiserror::Error;

/// Errors returned while constructing generation domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationDomainError {
    /// The source type is not one of the supported literals.
    #[error("source_type must be one of 'spline' or 'three', got '{0}'")]
    UnknownSourceType(String),

    /// The animation library is not one of the supported literals.
    #[error("animation must be one of 'framer' or 'gsap', got '{0}'")]
    UnknownAnimation(String),

    /// The component name is shorter than the 3-character minimum.
    #[error("name must have at least 3 characters, got {length}")]
    NameTooShort {
        /// Length of the rejected name in characters.
        length: usize,
    },

    /// The component name is longer than the 64-character maximum.
    #[error("name must have at most 64 characters, got {length}")]
    NameTooLong {
        /// Length of the rejected name in characters.
        length: usize,
    },

    /// The input URL could not be parsed as an absolute URL.
    #[error("input_url '{url}' is not a valid URL: {reason}")]
    InvalidSourceUrl {
        /// The rejected URL text.
        url: String,
        /// Parser failure description.
        reason: String,
    },

    /// The input URL uses a scheme other than `http` or `https`.
    #[error("input_url scheme must be http or https, got '{0}'")]
    UnsupportedUrlScheme(String),

    /// The input URL has no host component.
    #[error("input_url '{0}' has no host")]
    MissingUrlHost(String),

    /// The input URL exceeds the 2083-character limit.
    #[error("input_url exceeds 2083 character limit: {length}")]
    SourceUrlTooLong {
        /// Length of the rejected URL in characters.
        length: usize,
    },

    /// The options bag is not a JSON object.
    #[error("options must be a JSON object, got {0}")]
    InvalidOptions(&'static str),

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    MalformedBody(String),
}
