//! Domain models for AgroAssist

mod finance;
mod forecast;
mod prediction;
mod scheme;
mod soil;
mod user;

pub use finance::*;
pub use forecast::*;
pub use prediction::*;
pub use scheme::*;
pub use soil::*;
pub use user::*;
