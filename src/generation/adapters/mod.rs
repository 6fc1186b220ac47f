//! Adapter implementations of the generation store port.

pub mod memory;
pub mod postgres;
