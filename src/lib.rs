//! VibeCraft: React component generation backend.
//!
//! The crate validates generation requests, renders a React component from
//! templates and records every generation in an optional store that can be
//! listed later.
//!
//! # Architecture
//!
//! VibeCraft follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`generation`]: Request validation, rendering and the generation store
//! - [`http`]: JSON API over the generation service
//! - [`config`]: Process configuration from flags and environment
//! - [`telemetry`]: Tracing subscriber set-up

pub mod config;
pub mod generation;
pub mod http;
pub mod telemetry;
