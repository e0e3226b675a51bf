//! Business logic services for AgroAssist

pub mod auth;
pub mod forecast;
pub mod history;
pub mod ledger;
pub mod prediction;

pub use auth::AuthService;
pub use forecast::ForecastService;
pub use history::HistoryService;
pub use ledger::LedgerService;
pub use prediction::PredictionService;
