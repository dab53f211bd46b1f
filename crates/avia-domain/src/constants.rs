//! Fixed fuel policy values for the flight log
//!
//! All masses in kilograms, all rates in kilograms per hour.

/// Book fuel on board before refueling operations
pub const INITIAL_FUEL_KG: f64 = 1000.0;

/// Book fuel on board after the flight
pub const FINAL_FUEL_KG: f64 = 1000.0;

/// Technical drainage before flight when the auxiliary tanks were filled
pub const DRAIN_WITH_AUX_KG: f64 = 8.0;

/// Technical drainage before flight without auxiliary tanks
pub const DRAIN_WITHOUT_AUX_KG: f64 = 4.0;

/// Prescribed burn rate while taxiing on the ground
pub const GROUND_RATE_KG_PER_HOUR: f64 = 185.0;

/// Prescribed burn rate while airborne
pub const AIR_RATE_KG_PER_HOUR: f64 = 325.0;
