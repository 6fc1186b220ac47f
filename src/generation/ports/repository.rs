//! Repository port for generation record persistence and listing.

use crate::generation::domain::{GenerationId, GenerationRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for generation store operations.
pub type GenerationStoreResult<T> = Result<T, GenerationStoreError>;

/// Append-only generation store contract.
///
/// There is no update or delete: records are immutable once inserted.
#[async_trait]
pub trait GenerationRepository: Send + Sync {
    /// Stores a new generation record and returns the identifier the store
    /// assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationStoreError::Persistence`] when the store rejects
    /// the write or cannot be reached.
    async fn insert(&self, record: &GenerationRecord) -> GenerationStoreResult<GenerationId>;

    /// Returns up to `limit` records, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationStoreError::Persistence`] when the query fails or
    /// [`GenerationStoreError::InvalidPersistedData`] when a stored row no
    /// longer validates.
    async fn list_recent(&self, limit: usize) -> GenerationStoreResult<Vec<GenerationRecord>>;

    /// Reports the store name and a sample of its collections.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationStoreError::Persistence`] when the store cannot be
    /// queried.
    async fn describe(&self) -> GenerationStoreResult<StoreDescription>;
}

/// Store identity reported by the diagnostic endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreDescription {
    /// Name of the connected database.
    pub database_name: String,
    /// Up to ten collection or table names.
    pub collections: Vec<String>,
}

/// Errors returned by generation store implementations.
#[derive(Debug, Clone, Error)]
pub enum GenerationStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl GenerationStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
