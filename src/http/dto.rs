//! Wire shapes for HTTP responses and query strings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generation::{domain::GenerationRecord, services::StoreDiagnostics};

const STORE_RUNNING: &str = "✅ Running";
const STORE_WORKING: &str = "✅ Connected & Working";
const STORE_UNAVAILABLE: &str = "❌ Not Available";
const URL_SET: &str = "✅ Set";

/// Formats a timestamp as ISO-8601 UTC with a `Z` suffix.
fn utc_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    /// Liveness message.
    pub message: String,
    /// Crate version.
    pub version: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "VibeCraft backend running".to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

/// Body of a successful `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Store identifier, or `null` when the generation was not recorded.
    pub id: Option<String>,
    /// Component name as supplied.
    pub name: String,
    /// Visual source.
    pub source_type: String,
    /// Animation library.
    pub animation: String,
    /// Creation instant, ISO-8601 UTC.
    pub created_at: String,
    /// Rendered component source.
    pub code: String,
}

impl From<GenerationRecord> for GenerateResponse {
    fn from(record: GenerationRecord) -> Self {
        let request = record.request();
        Self {
            id: record.id().map(|id| id.to_string()),
            name: request.name().as_str().to_owned(),
            source_type: request.source_type().as_str().to_owned(),
            animation: request.animation().as_str().to_owned(),
            created_at: utc_timestamp(record.created_at()),
            code: record.code().to_owned(),
        }
    }
}

/// One entry of `GET /generations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationItem {
    /// Store identifier.
    pub id: Option<String>,
    /// Visual source.
    pub source_type: String,
    /// Normalised scene URL, if one was supplied.
    pub input_url: Option<String>,
    /// Animation library.
    pub animation: String,
    /// Component name.
    pub name: String,
    /// Options recorded verbatim.
    pub options: Value,
    /// Rendered component source.
    pub code: String,
    /// Creation instant, ISO-8601 UTC.
    pub created_at: String,
}

impl From<GenerationRecord> for GenerationItem {
    fn from(record: GenerationRecord) -> Self {
        let request = record.request();
        Self {
            id: record.id().map(|id| id.to_string()),
            source_type: request.source_type().as_str().to_owned(),
            input_url: request.input_url().map(|url| url.as_str().to_owned()),
            animation: request.animation().as_str().to_owned(),
            name: request.name().as_str().to_owned(),
            options: request.options().clone().into_value(),
            code: record.code().to_owned(),
            created_at: utc_timestamp(record.created_at()),
        }
    }
}

/// Body of `GET /generations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationListResponse {
    /// Records, newest first.
    pub items: Vec<GenerationItem>,
    /// Number of items returned.
    pub total: usize,
}

impl From<Vec<GenerationRecord>> for GenerationListResponse {
    fn from(records: Vec<GenerationRecord>) -> Self {
        let items: Vec<GenerationItem> = records.into_iter().map(GenerationItem::from).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Query string of `GET /generations`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListParams {
    /// Maximum number of records to return.
    pub limit: Option<usize>,
}

/// Body of `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    /// Always reports the backend as running.
    pub backend: String,
    /// Human-readable store status.
    pub database: String,
    /// Whether a connection string is configured.
    pub database_url: Option<String>,
    /// Name of the connected database, when known.
    pub database_name: Option<String>,
    /// `Connected` or `Not Connected`.
    pub connection_status: String,
    /// Up to ten collection or table names.
    pub collections: Vec<String>,
}

impl From<StoreDiagnostics> for DiagnosticsResponse {
    fn from(diagnostics: StoreDiagnostics) -> Self {
        let backend = STORE_RUNNING.to_owned();
        match diagnostics {
            StoreDiagnostics::NotConfigured => Self {
                backend,
                database: STORE_UNAVAILABLE.to_owned(),
                database_url: None,
                database_name: None,
                connection_status: "Not Connected".to_owned(),
                collections: Vec::new(),
            },
            StoreDiagnostics::Connected {
                database_name,
                collections,
            } => Self {
                backend,
                database: STORE_WORKING.to_owned(),
                database_url: Some(URL_SET.to_owned()),
                database_name: Some(database_name),
                connection_status: "Connected".to_owned(),
                collections,
            },
            StoreDiagnostics::Unreachable { error } => Self {
                backend,
                database: format!("⚠️ Connected but Error: {error}"),
                database_url: Some(URL_SET.to_owned()),
                database_name: None,
                connection_status: "Not Connected".to_owned(),
                collections: Vec::new(),
            },
        }
    }
}
