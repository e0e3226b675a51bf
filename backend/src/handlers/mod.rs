//! HTTP handlers for AgroAssist

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod history;
pub mod ledger;
pub mod prediction;
pub mod schemes;
pub mod soil_health;
pub mod weather;

pub use auth::*;
pub use dashboard::*;
pub use health::*;
pub use history::*;
pub use ledger::*;
pub use prediction::*;
pub use schemes::*;
pub use soil_health::*;
pub use weather::*;
