//! Shared handler state.

use mockable::Clock;

use crate::generation::{ports::GenerationRepository, services::GenerationService};

/// State handed to every request handler.
///
/// The store client lives inside the service and is shared by all requests.
pub struct AppState<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    generations: GenerationService<R, C>,
}

impl<R, C> AppState<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state around a generation service.
    #[must_use]
    pub const fn new(generations: GenerationService<R, C>) -> Self {
        Self { generations }
    }

    /// Returns the generation service.
    #[must_use]
    pub const fn generations(&self) -> &GenerationService<R, C> {
        &self.generations
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            generations: self.generations.clone(),
        }
    }
}
