//! Diesel row models for generation persistence.

use super::schema::generations;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for generation records.
///
/// `updated_at` is not selected; it stays internal to the table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = generations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenerationRow {
    /// Store-assigned identifier.
    pub id: uuid::Uuid,
    /// Visual source kind.
    pub source_type: String,
    /// Optional visual source URL.
    pub input_url: Option<String>,
    /// Animation library.
    pub animation: String,
    /// Component display name.
    pub name: String,
    /// Options JSON payload.
    pub options: Value,
    /// Rendered component source.
    pub code: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for generation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = generations)]
pub struct NewGenerationRow {
    /// Store-assigned identifier.
    pub id: uuid::Uuid,
    /// Visual source kind.
    pub source_type: String,
    /// Optional visual source URL.
    pub input_url: Option<String>,
    /// Animation library.
    pub animation: String,
    /// Component display name.
    pub name: String,
    /// Options JSON payload.
    pub options: Value,
    /// Rendered component source.
    pub code: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last write timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Single text column returned by catalogue queries.
#[derive(Debug, Clone, QueryableByName)]
pub struct TextRow {
    /// Column value.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub value: String,
}
