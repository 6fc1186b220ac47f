//! Generation orchestration: validation, rendering and best-effort
//! persistence.

use crate::generation::{
    domain::{
        AnimationLibrary, ComponentName, GenerationDomainError, GenerationOptions,
        GenerationRecord, GenerationRequest, SourceType, SourceUrl,
    },
    ports::{GenerationRepository, GenerationStoreError},
};
use mockable::Clock;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use super::renderer::{RenderError, render_component};

/// Number of records listed when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Upper bound applied to listing limits.
pub const MAX_LIST_LIMIT: usize = 100;

const MAX_STORE_ERROR_CHARS: usize = 80;

/// Unvalidated generation request as received on the wire.
///
/// Every field may be omitted; [`GenerateRequest::validate`] applies defaults
/// and constraints. Only `input_url` and `options` accept an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateRequest {
    /// `spline` or `three`; defaults to `spline`.
    #[serde(default, deserialize_with = "non_null_string")]
    pub source_type: Option<String>,
    /// Absolute `http`/`https` URL of the visual source.
    #[serde(default)]
    pub input_url: Option<String>,
    /// `framer` or `gsap`; defaults to `framer`.
    #[serde(default, deserialize_with = "non_null_string")]
    pub animation: Option<String>,
    /// Component display name, 3 to 64 characters.
    #[serde(default, deserialize_with = "non_null_string")]
    pub name: Option<String>,
    /// Free-form JSON object.
    #[serde(default)]
    pub options: Option<Value>,
}

/// Reads a field that may be omitted but must be a string when present.
fn non_null_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl GenerateRequest {
    /// Creates a request carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the source type literal.
    #[must_use]
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = Some(source_type.into());
        self
    }

    /// Sets the animation literal.
    #[must_use]
    pub fn with_animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    /// Sets the input URL text.
    #[must_use]
    pub fn with_input_url(mut self, url: impl Into<String>) -> Self {
        self.input_url = Some(url.into());
        self
    }

    /// Sets the options value.
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    /// Validates the wire fields into a [`GenerationRequest`].
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerationDomainError`] found, checking source
    /// type, animation, name, input URL and options in that order.
    pub fn validate(self) -> Result<GenerationRequest, GenerationDomainError> {
        let Self {
            source_type,
            input_url,
            animation,
            name,
            options,
        } = self;

        let parsed_source_type = source_type
            .as_deref()
            .map_or(Ok(SourceType::default()), SourceType::try_from)?;
        let parsed_animation = animation
            .as_deref()
            .map_or(Ok(AnimationLibrary::default()), AnimationLibrary::try_from)?;
        let parsed_name = name.map_or_else(|| Ok(ComponentName::default()), ComponentName::new)?;
        let parsed_url = input_url.as_deref().map(SourceUrl::parse).transpose()?;
        let parsed_options = GenerationOptions::from_value(options)?;

        let request = GenerationRequest::new(parsed_source_type, parsed_animation, parsed_name)
            .with_options(parsed_options);
        Ok(match parsed_url {
            Some(url) => request.with_input_url(url),
            None => request,
        })
    }
}

/// Store reachability report for the diagnostic endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreDiagnostics {
    /// No store is configured; the service runs without persistence.
    NotConfigured,
    /// The store answered.
    Connected {
        /// Name of the connected database.
        database_name: String,
        /// Up to ten collection or table names.
        collections: Vec<String>,
    },
    /// A store is configured but could not be queried.
    Unreachable {
        /// Store error text, truncated to 80 characters.
        error: String,
    },
}

/// Service-level errors for generation operations.
#[derive(Debug, Error)]
pub enum GenerationServiceError {
    /// Request validation failed.
    #[error(transparent)]
    Validation(#[from] GenerationDomainError),
    /// Template rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Reading from the store failed.
    #[error(transparent)]
    Store(#[from] GenerationStoreError),
}

/// Result type for generation service operations.
pub type GenerationServiceResult<T> = Result<T, GenerationServiceError>;

/// Generation orchestration service.
///
/// Holds an optional store: without one, generations are rendered and
/// returned but never recorded, and listings are empty.
pub struct GenerationService<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    repository: Option<Arc<R>>,
    clock: Arc<C>,
}

impl<R, C> Clone for GenerationService<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> GenerationService<R, C>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a generation service backed by `repository`.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository: Some(repository),
            clock,
        }
    }

    /// Creates a generation service that never persists.
    #[must_use]
    pub const fn without_store(clock: Arc<C>) -> Self {
        Self {
            repository: None,
            clock,
        }
    }

    /// Returns `true` when a store is configured.
    #[must_use]
    pub const fn has_store(&self) -> bool {
        self.repository.is_some()
    }

    /// Validates, renders and records a generation.
    ///
    /// Recording is best-effort: when the store fails the failure is logged
    /// and the returned record has no identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationServiceError::Validation`] for invalid input or
    /// [`GenerationServiceError::Render`] if the template engine fails.
    /// Store errors are never returned.
    #[tracing::instrument(skip_all, fields(name = request.name.as_deref()))]
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> GenerationServiceResult<GenerationRecord> {
        let validated = request.validate()?;
        let code = render_component(&validated)?;
        let record = GenerationRecord::new(validated, code, &*self.clock);

        let Some(repository) = &self.repository else {
            tracing::debug!("no store configured; generation not recorded");
            return Ok(record);
        };

        match repository.insert(&record).await {
            Ok(id) => {
                tracing::info!(%id, "generation recorded");
                Ok(record.with_id(id))
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to record generation");
                Ok(record)
            }
        }
    }

    /// Lists recent generations, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_LIST_LIMIT`] and is capped at
    /// [`MAX_LIST_LIMIT`]. Without a store the listing is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationServiceError::Store`] when the store query fails.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, limit: Option<usize>) -> GenerationServiceResult<Vec<GenerationRecord>> {
        let Some(repository) = &self.repository else {
            return Ok(Vec::new());
        };

        let effective_limit = limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
        repository
            .list_recent(effective_limit)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to list generations");
                err.into()
            })
    }

    /// Probes the store. Never fails; errors are reported in the result.
    pub async fn diagnostics(&self) -> StoreDiagnostics {
        let Some(repository) = &self.repository else {
            return StoreDiagnostics::NotConfigured;
        };

        match repository.describe().await {
            Ok(description) => StoreDiagnostics::Connected {
                database_name: description.database_name,
                collections: description.collections,
            },
            Err(err) => StoreDiagnostics::Unreachable {
                error: err.to_string().chars().take(MAX_STORE_ERROR_CHARS).collect(),
            },
        }
    }
}
