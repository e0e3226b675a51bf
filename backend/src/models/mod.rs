//! Database models for AgroAssist
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
