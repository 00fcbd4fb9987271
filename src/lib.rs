pub mod output;
pub mod profile;
pub mod scoring;
pub mod telemetry;
