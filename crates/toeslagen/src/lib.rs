pub mod benefits;
pub mod config;
pub mod error;
pub mod telemetry;
