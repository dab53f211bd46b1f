//! Domain model types

pub mod calculation;

pub use calculation::{AuxRefueling, CalculationInput, FuelBalance};
