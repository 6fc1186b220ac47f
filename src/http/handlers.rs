//! Request handlers.

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use mockable::Clock;

use super::{
    dto::{
        DiagnosticsResponse, GenerateResponse, GenerationListResponse, ListParams, RootResponse,
    },
    error::ApiError,
    state::AppState,
};
use crate::generation::{
    domain::GenerationDomainError, ports::GenerationRepository, services::GenerateRequest,
};

pub(super) async fn root() -> Json<RootResponse> {
    Json(RootResponse::default())
}

pub(super) async fn store_diagnostics<R, C>(
    State(state): State<AppState<R, C>>,
) -> Json<DiagnosticsResponse>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    Json(state.generations().diagnostics().await.into())
}

// Body rejections are reported as 400 rather than axum's 415/422 so every
// malformed request looks the same to callers.
pub(super) async fn generate<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = payload.map_err(|rejection| {
        ApiError::from(GenerationDomainError::MalformedBody(rejection.body_text()))
    })?;
    let record = state.generations().generate(request).await?;
    Ok(Json(record.into()))
}

pub(super) async fn list_generations<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<GenerationListResponse>, ApiError>
where
    R: GenerationRepository,
    C: Clock + Send + Sync,
{
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let records = state.generations().list(params.limit).await?;
    Ok(Json(records.into()))
}
