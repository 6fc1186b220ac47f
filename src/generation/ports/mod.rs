//! Port contracts for generation persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the generation
//! service.

pub mod repository;

pub use repository::{
    GenerationRepository, GenerationStoreError, GenerationStoreResult, StoreDescription,
};
