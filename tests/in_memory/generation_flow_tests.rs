//! End-to-end generation flow through the service and in-memory store.

use super::helpers::{repo, service_over};
use std::sync::Arc;
use vibecraft::generation::{
    adapters::memory::InMemoryGenerationRepository,
    domain::{AnimationLibrary, SourceType},
    services::{GenerateRequest, GenerationServiceError, render_component},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn generated_records_are_listed_newest_first(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    for name in ["FirstScene", "SecondScene", "ThirdScene"] {
        service.generate(GenerateRequest::named(name)).await?;
    }

    let listed = service.list(None).await?;
    let names: Vec<&str> = listed
        .iter()
        .map(|record| record.request().name().as_str())
        .collect();
    assert_eq!(names, vec!["ThirdScene", "SecondScene", "FirstScene"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listed_record_matches_generated_record(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let request = GenerateRequest::named("Hero Banner")
        .with_source_type("three")
        .with_animation("gsap")
        .with_input_url("https://example.com/scene")
        .with_options(json!({"theme": "dark", "speed": 2}));

    let generated = service.generate(request).await?;
    let listed = service.list(Some(1)).await?;
    let stored = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected the generation to be listed"))?;

    eyre::ensure!(generated.id().is_some(), "generation should be recorded");
    assert_eq!(stored, &generated);
    assert_eq!(stored.request().source_type(), SourceType::Three);
    assert_eq!(stored.request().animation(), AnimationLibrary::Gsap);
    assert_eq!(
        stored.request().input_url().map(|url| url.as_str()),
        Some("https://example.com/scene")
    );
    assert_eq!(stored.request().options().get("theme"), Some(&json!("dark")));
    assert_eq!(stored.code(), render_component(stored.request())?);
    Ok(())
}

#[rstest]
#[case(GenerateRequest::named("ab"))]
#[case(GenerateRequest::named("Valid").with_source_type("blender"))]
#[case(GenerateRequest::named("Valid").with_animation("anime"))]
#[case(GenerateRequest::named("Valid").with_input_url("ftp://example.com/scene"))]
#[case(GenerateRequest::named("Valid").with_options(json!([1, 2])))]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_requests_are_never_recorded(
    repo: Arc<InMemoryGenerationRepository>,
    #[case] request: GenerateRequest,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let result = service.generate(request).await;

    eyre::ensure!(
        matches!(result, Err(GenerationServiceError::Validation(_))),
        "expected a validation error, got {result:?}"
    );
    assert_eq!(repo.len()?, 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identical_requests_record_separate_generations(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let service = service_over(&repo);
    let first = service.generate(GenerateRequest::named("Repeat")).await?;
    let second = service.generate(GenerateRequest::named("Repeat")).await?;

    assert_eq!(first.code(), second.code());
    eyre::ensure!(first.id() != second.id(), "ids should differ");
    assert_eq!(repo.len()?, 2);
    Ok(())
}
