pub mod census;
pub mod config;
pub mod error;
pub mod sources;
pub mod telemetry;
