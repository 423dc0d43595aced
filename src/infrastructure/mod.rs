pub mod rest;
pub mod telemetry;
