pub mod config;
pub mod errors;
pub mod telemetry;

pub use config::*;
pub use errors::*;
pub use telemetry::*;
