//! Shared types and models for AgroAssist
//!
//! This crate contains types shared between the backend, frontend (via WASM),
//! and other components of the system. The pure computation engines (soil
//! health scoring, forecast aggregation) live here so every consumer runs the
//! same logic.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
