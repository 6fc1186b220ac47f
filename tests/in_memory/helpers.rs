//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use vibecraft::generation::{
    adapters::memory::InMemoryGenerationRepository,
    domain::{
        AnimationLibrary, ComponentName, GenerationId, GenerationRecord, GenerationRequest,
        PersistedGenerationData, SourceType,
    },
    services::GenerationService,
};

/// Service type used by in-memory tests.
pub type TestService = GenerationService<InMemoryGenerationRepository, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryGenerationRepository> {
    Arc::new(InMemoryGenerationRepository::new())
}

/// Builds a service over `repo`.
pub fn service_over(repo: &Arc<InMemoryGenerationRepository>) -> TestService {
    GenerationService::new(Arc::clone(repo), Arc::new(DefaultClock))
}

/// Fixed reference instant for hand-built records.
pub fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z")
        .map(|value| value.with_timezone(&Utc))
        .unwrap_or_default()
}

/// Builds a record named `name`, created `offset_secs` after [`base_time`].
///
/// # Errors
///
/// Returns an error if `name` is not a valid component name.
pub fn record_at(name: &str, offset_secs: i64) -> Result<GenerationRecord, eyre::Report> {
    let request = GenerationRequest::new(
        SourceType::Spline,
        AnimationLibrary::Framer,
        ComponentName::new(name)?,
    );
    Ok(GenerationRecord::from_persisted(PersistedGenerationData {
        id: GenerationId::new(),
        request,
        code: format!("// {name}"),
        created_at: base_time() + Duration::seconds(offset_secs),
    }))
}
