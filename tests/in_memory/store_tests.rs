//! Repository-level behaviour of the in-memory generation store.

use super::helpers::{record_at, repo};
use std::sync::Arc;
use vibecraft::generation::{
    adapters::memory::InMemoryGenerationRepository, ports::GenerationRepository,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_fresh_identifiers(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let record = record_at("Alpha", 0)?;
    let first = repo.insert(&record).await?;
    let second = repo.insert(&record).await?;

    eyre::ensure!(first != second, "each insert should receive a new id");
    eyre::ensure!(repo.len()? == 2, "both inserts should be stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_recent_orders_by_creation_time_descending(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    // Inserted out of chronological order.
    for (name, offset) in [("Middle", 10), ("Oldest", 0), ("Newest", 20)] {
        repo.insert(&record_at(name, offset)?).await?;
    }

    let listed = repo.list_recent(10).await?;
    let names: Vec<&str> = listed
        .iter()
        .map(|record| record.request().name().as_str())
        .collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn equal_timestamps_list_latest_insert_first(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    repo.insert(&record_at("First", 5)?).await?;
    repo.insert(&record_at("Second", 5)?).await?;

    let listed = repo.list_recent(10).await?;
    let names: Vec<&str> = listed
        .iter()
        .map(|record| record.request().name().as_str())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
    Ok(())
}

#[rstest]
#[case(0, 0)]
#[case(2, 2)]
#[case(50, 3)]
#[tokio::test(flavor = "multi_thread")]
async fn list_recent_honours_limit(
    repo: Arc<InMemoryGenerationRepository>,
    #[case] limit: usize,
    #[case] expected: usize,
) -> Result<(), eyre::Report> {
    for offset in 0..3 {
        repo.insert(&record_at("Sample", offset)?).await?;
    }

    let listed = repo.list_recent(limit).await?;
    assert_eq!(listed.len(), expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_records_carry_their_assigned_id(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let id = repo.insert(&record_at("Tracked", 0)?).await?;
    let listed = repo.list_recent(1).await?;
    let stored = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected one stored record"))?;

    assert_eq!(stored.id(), Some(id));
    assert_eq!(stored.code(), "// Tracked");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn describe_reports_memory_store(
    repo: Arc<InMemoryGenerationRepository>,
) -> Result<(), eyre::Report> {
    let description = repo.describe().await?;
    assert_eq!(description.database_name, "memory");
    assert_eq!(description.collections, vec!["generations".to_owned()]);
    Ok(())
}
