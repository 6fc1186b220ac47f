//! In-memory generation store for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::generation::{
    domain::{GenerationId, GenerationRecord, PersistedGenerationData},
    ports::{GenerationRepository, GenerationStoreError, GenerationStoreResult, StoreDescription},
};

const COLLECTION_NAME: &str = "generations";

/// Thread-safe in-memory generation store.
///
/// Records are kept in insertion order; listing walks them newest first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGenerationRepository {
    records: Arc<RwLock<Vec<GenerationRecord>>>,
}

impl InMemoryGenerationRepository {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationStoreError::Persistence`] if the lock is poisoned.
    pub fn len(&self) -> GenerationStoreResult<usize> {
        let records = self.records.read().map_err(|err| {
            GenerationStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(records.len())
    }
}

#[async_trait]
impl GenerationRepository for InMemoryGenerationRepository {
    async fn insert(&self, record: &GenerationRecord) -> GenerationStoreResult<GenerationId> {
        let mut records = self.records.write().map_err(|err| {
            GenerationStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let id = GenerationId::new();
        records.push(GenerationRecord::from_persisted(PersistedGenerationData {
            id,
            request: record.request().clone(),
            code: record.code().to_owned(),
            created_at: record.created_at(),
        }));
        Ok(id)
    }

    async fn list_recent(&self, limit: usize) -> GenerationStoreResult<Vec<GenerationRecord>> {
        let records = self.records.read().map_err(|err| {
            GenerationStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut recent: Vec<GenerationRecord> = records.iter().rev().cloned().collect();
        recent.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        recent.truncate(limit);
        Ok(recent)
    }

    async fn describe(&self) -> GenerationStoreResult<StoreDescription> {
        Ok(StoreDescription {
            database_name: "memory".to_owned(),
            collections: vec![COLLECTION_NAME.to_owned()],
        })
    }
}
