//! HTTP surface of the generation service.
//!
//! Routes:
//!
//! - `GET /` - service identity and version
//! - `GET /test` - store reachability report, never fails
//! - `POST /generate` - validate, render and record a generation
//! - `GET /generations?limit=N` - recent generations, newest first

mod dto;
mod error;
mod handlers;
mod state;

pub use dto::{
    DiagnosticsResponse, GenerateResponse, GenerationItem, GenerationListResponse, ListParams,
    RootResponse,
};
pub use error::ApiError;
pub use state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::generation::ports::GenerationRepository;

/// Builds the service router over `state`.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: GenerationRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::store_diagnostics::<R, C>))
        .route("/generate", post(handlers::generate::<R, C>))
        .route("/generations", get(handlers::list_generations::<R, C>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
