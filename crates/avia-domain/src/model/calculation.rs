use serde::{Deserialize, Serialize};

/// Auxiliary (end) tank refueling data. Present only when the aux tanks
/// were actually filled for the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxRefueling {
    /// Refueled quantity in liters
    pub liters: f64,
    /// Fuel density in kg/L
    pub density: f64,
    /// Refueling document reference
    pub doc_ref: String,
}

/// Validated input for a single fuel balance calculation.
///
/// The surrounding form layer is responsible for parsing and non-empty
/// checks; the calculation engine only guards against non-finite and
/// negative numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Taxiing time in minutes
    pub ground_minutes: f64,
    /// Airborne time in minutes
    pub air_minutes: f64,
    /// Main tank refueled quantity in liters
    pub main_fuel_liters: f64,
    /// Main tank fuel density in kg/L
    pub main_fuel_density: f64,
    /// Main tank refueling document reference
    pub main_doc_ref: String,
    /// Auxiliary tank refueling, if the aux tanks were used
    #[serde(default)]
    pub aux: Option<AuxRefueling>,
}

impl CalculationInput {
    pub fn aux_tank_used(&self) -> bool {
        self.aux.is_some()
    }
}

/// Derived fuel balance figures. All values in kilograms.
///
/// Immutable once produced; a pure function of [`CalculationInput`] and the
/// policy constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelBalance {
    /// Main tank refueling converted to mass
    pub main_fuel_kg: f64,
    /// Auxiliary tank refueling converted to mass (0 without aux tanks)
    pub aux_fuel_kg: f64,
    /// Technical drainage before flight
    pub drain_before_flight_kg: f64,
    /// Fuel on board before engine start
    pub fuel_before_start_kg: f64,
    /// Actual fuel burned during the flight
    pub consumed_in_flight_kg: f64,
    /// Prescribed burn for the taxiing time
    pub ground_consumption_kg: f64,
    /// Prescribed burn for the airborne time
    pub air_consumption_kg: f64,
    /// Total prescribed burn
    pub prescribed_consumption_kg: f64,
    /// Prescribed minus actual burn (positive = fuel saved)
    pub economy_kg: f64,
}
