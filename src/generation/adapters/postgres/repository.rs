//! `PostgreSQL` repository implementation for generation records.

use super::{
    models::{GenerationRow, NewGenerationRow, TextRow},
    schema::generations,
};
use crate::generation::{
    domain::{
        AnimationLibrary, ComponentName, GenerationId, GenerationOptions, GenerationRecord,
        GenerationRequest, PersistedGenerationData, SourceType, SourceUrl,
    },
    ports::{GenerationRepository, GenerationStoreError, GenerationStoreResult, StoreDescription},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;

/// `PostgreSQL` connection pool type used by generation adapters.
pub type GenerationPgPool = Pool<ConnectionManager<PgConnection>>;

/// How long a pooled checkout waits before reporting the store unreachable.
pub const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Idempotent DDL for the `generations` table.
const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-16-000000_create_generations/up.sql");

const DATABASE_NAME_SQL: &str = "SELECT current_database()::text AS value";

const TABLE_NAMES_SQL: &str = "SELECT table_name::text AS value \
     FROM information_schema.tables \
     WHERE table_schema = 'public' \
     ORDER BY table_name \
     LIMIT 10";

/// `PostgreSQL`-backed generation store.
///
/// Diesel calls are blocking, so every operation runs on the blocking pool
/// through [`tokio::task::spawn_blocking`].
#[derive(Debug, Clone)]
pub struct PostgresGenerationRepository {
    pool: GenerationPgPool,
}

impl PostgresGenerationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: GenerationPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pool for `database_url` without connecting eagerly.
    ///
    /// Connections are opened on first use, so an unreachable database does
    /// not prevent start-up. Checkouts give up after
    /// [`CONNECTION_TIMEOUT`].
    #[must_use]
    pub fn connect_lazy(database_url: &str, max_size: u32) -> Self {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .max_size(max_size)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build_unchecked(manager);
        Self::new(pool)
    }

    /// Creates the `generations` table and its index when missing.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationStoreError::Persistence`] when no connection can
    /// be obtained or the DDL fails.
    pub async fn ensure_schema(&self) -> GenerationStoreResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(SCHEMA_SQL)
                .map_err(GenerationStoreError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> GenerationStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> GenerationStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(GenerationStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(GenerationStoreError::persistence)?
    }
}

#[async_trait]
impl GenerationRepository for PostgresGenerationRepository {
    async fn insert(&self, record: &GenerationRecord) -> GenerationStoreResult<GenerationId> {
        let id = GenerationId::new();
        let new_row = to_new_row(id, record);

        self.run_blocking(move |connection| {
            diesel::insert_into(generations::table)
                .values(&new_row)
                .execute(connection)
                .map_err(GenerationStoreError::persistence)?;
            Ok(id)
        })
        .await
    }

    async fn list_recent(&self, limit: usize) -> GenerationStoreResult<Vec<GenerationRecord>> {
        let row_limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.run_blocking(move |connection| {
            let rows = generations::table
                .order(generations::created_at.desc())
                .limit(row_limit)
                .select(GenerationRow::as_select())
                .load::<GenerationRow>(connection)
                .map_err(GenerationStoreError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn describe(&self) -> GenerationStoreResult<StoreDescription> {
        self.run_blocking(|connection| {
            let database_name = diesel::sql_query(DATABASE_NAME_SQL)
                .get_result::<TextRow>(connection)
                .map_err(GenerationStoreError::persistence)?
                .value;
            let collections = diesel::sql_query(TABLE_NAMES_SQL)
                .load::<TextRow>(connection)
                .map_err(GenerationStoreError::persistence)?
                .into_iter()
                .map(|row| row.value)
                .collect();
            Ok(StoreDescription {
                database_name,
                collections,
            })
        })
        .await
    }
}

fn to_new_row(id: GenerationId, record: &GenerationRecord) -> NewGenerationRow {
    let request = record.request();
    NewGenerationRow {
        id: id.into_inner(),
        source_type: request.source_type().as_str().to_owned(),
        input_url: request.input_url().map(|url| url.as_str().to_owned()),
        animation: request.animation().as_str().to_owned(),
        name: request.name().as_str().to_owned(),
        options: request.options().clone().into_value(),
        code: record.code().to_owned(),
        created_at: record.created_at(),
        updated_at: record.created_at(),
    }
}

fn row_to_record(row: GenerationRow) -> GenerationStoreResult<GenerationRecord> {
    let GenerationRow {
        id,
        source_type,
        input_url,
        animation,
        name,
        options,
        code,
        created_at,
    } = row;

    let parsed_source_type = SourceType::try_from(source_type.as_str())
        .map_err(GenerationStoreError::invalid_persisted_data)?;
    let parsed_animation = AnimationLibrary::try_from(animation.as_str())
        .map_err(GenerationStoreError::invalid_persisted_data)?;
    let parsed_name = ComponentName::new(name).map_err(GenerationStoreError::invalid_persisted_data)?;
    let parsed_options = GenerationOptions::from_value(Some(options))
        .map_err(GenerationStoreError::invalid_persisted_data)?;

    let mut request = GenerationRequest::new(parsed_source_type, parsed_animation, parsed_name)
        .with_options(parsed_options);
    if let Some(url) = input_url {
        let parsed_url =
            SourceUrl::parse(&url).map_err(GenerationStoreError::invalid_persisted_data)?;
        request = request.with_input_url(parsed_url);
    }

    Ok(GenerationRecord::from_persisted(PersistedGenerationData {
        id: GenerationId::from_uuid(id),
        request,
        code,
        created_at,
    }))
}
