//! Application layer for avia-calc
//!
//! Sits between the raw string inputs of an interaction layer (CLI or GUI)
//! and the pure calculation engine in `avia-domain`.

pub mod config;
pub mod form;
pub mod report;

pub use config::Config;
pub use form::FlightLogForm;
pub use report::FuelReport;
