//! Domain services

pub mod fuel_calculator;
pub mod time_parser;

pub use fuel_calculator::compute_fuel_balance;
pub use time_parser::parse_flight_minutes;
