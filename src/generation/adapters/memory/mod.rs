//! In-memory adapters for generation persistence.

mod generation_store;

pub use generation_store::InMemoryGenerationRepository;
