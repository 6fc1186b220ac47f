//! Validated generation request.

use super::{AnimationLibrary, ComponentName, GenerationOptions, SourceType, SourceUrl};
use serde::{Deserialize, Serialize};

/// Immutable description of the component to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    source_type: SourceType,
    input_url: Option<SourceUrl>,
    animation: AnimationLibrary,
    name: ComponentName,
    options: GenerationOptions,
}

impl GenerationRequest {
    /// Creates a request with no source URL and no options.
    #[must_use]
    pub fn new(source_type: SourceType, animation: AnimationLibrary, name: ComponentName) -> Self {
        Self {
            source_type,
            input_url: None,
            animation,
            name,
            options: GenerationOptions::default(),
        }
    }

    /// Sets the visual source URL.
    #[must_use]
    pub fn with_input_url(mut self, url: SourceUrl) -> Self {
        self.input_url = Some(url);
        self
    }

    /// Sets the options bag.
    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the visual source kind.
    #[must_use]
    pub const fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Returns the visual source URL, if one was supplied.
    #[must_use]
    pub const fn input_url(&self) -> Option<&SourceUrl> {
        self.input_url.as_ref()
    }

    /// Returns the animation library.
    #[must_use]
    pub const fn animation(&self) -> AnimationLibrary {
        self.animation
    }

    /// Returns the component name.
    #[must_use]
    pub const fn name(&self) -> &ComponentName {
        &self.name
    }

    /// Returns the options bag.
    #[must_use]
    pub const fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Returns `true` when the component embeds a Spline scene.
    #[must_use]
    pub const fn uses_spline(&self) -> bool {
        matches!(self.source_type, SourceType::Spline)
    }

    /// Returns `true` when the component animates with `framer-motion`.
    #[must_use]
    pub const fn is_framer(&self) -> bool {
        matches!(self.animation, AnimationLibrary::Framer)
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(
            SourceType::default(),
            AnimationLibrary::default(),
            ComponentName::default(),
        )
    }
}
