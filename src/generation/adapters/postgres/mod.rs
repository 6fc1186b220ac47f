//! `PostgreSQL` adapters for generation persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CONNECTION_TIMEOUT, GenerationPgPool, PostgresGenerationRepository};
