//! Generation record aggregate root.

use super::{GenerationId, GenerationRequest};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A generation request together with the code rendered from it.
///
/// Records are immutable. The only way to build one outside persistence is
/// through the generation service, which renders `code` from `request`, so
/// the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    id: Option<GenerationId>,
    request: GenerationRequest,
    code: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted generation record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedGenerationData {
    /// Store-assigned identifier.
    pub id: GenerationId,
    /// Persisted request fields.
    pub request: GenerationRequest,
    /// Persisted rendered code.
    pub code: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl GenerationRecord {
    /// Creates an unpersisted record for freshly rendered code.
    pub(crate) fn new(request: GenerationRequest, code: String, clock: &impl Clock) -> Self {
        Self {
            id: None,
            request,
            code,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedGenerationData) -> Self {
        Self {
            id: Some(data.id),
            request: data.request,
            code: data.code,
            created_at: data.created_at,
        }
    }

    /// Returns the record with its store-assigned identifier.
    #[must_use]
    pub(crate) const fn with_id(mut self, id: GenerationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the store-assigned identifier, or `None` when the record was
    /// not persisted.
    #[must_use]
    pub const fn id(&self) -> Option<GenerationId> {
        self.id
    }

    /// Returns the request the code was rendered from.
    #[must_use]
    pub const fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Returns the rendered component source.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
