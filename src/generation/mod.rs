//! Component generation for VibeCraft.
//!
//! A generation turns a validated request (visual source, animation library,
//! component name, free-form options) into React component source text, and
//! optionally records the request together with its rendered code. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Rendering and orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
