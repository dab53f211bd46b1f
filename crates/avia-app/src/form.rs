//! Flight log form: raw string fields and their validation
//!
//! The form owns everything the calculation engine assumes already done:
//! non-empty checks, numeric parsing, and flight time parsing. It also owns
//! reset, so the engine stays stateless.

use avia_domain::model::{AuxRefueling, CalculationInput};
use avia_domain::service::parse_flight_minutes;
use avia_types::{Error, Result};

/// Raw form state as entered by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightLogForm {
    /// Taxiing time ("HH:MM", "HH-MM" or minutes; empty = 0)
    pub ground_time: String,
    /// Airborne time (same formats)
    pub air_time: String,
    /// Main tank quantity in liters
    pub main_qty: String,
    /// Main tank fuel density in kg/L
    pub main_density: String,
    /// Main tank refueling document
    pub main_doc: String,
    /// Whether the auxiliary tanks were filled
    pub aux_used: bool,
    /// Aux tank quantity in liters
    pub aux_qty: String,
    /// Aux tank fuel density in kg/L
    pub aux_density: String,
    /// Aux tank refueling document
    pub aux_doc: String,
}

impl FlightLogForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the raw fields and builds a [`CalculationInput`].
    ///
    /// Field errors are terminal for this attempt; the caller presents the
    /// error and waits for corrected input.
    pub fn parse(&self) -> Result<CalculationInput> {
        let ground_minutes = parse_time_field("наземное время", &self.ground_time)?;
        let air_minutes = parse_time_field("полётное время", &self.air_time)?;

        require_non_empty("количество (основные баки)", &self.main_qty)?;
        require_non_empty("плотность (основные баки)", &self.main_density)?;
        require_non_empty("документ (основные баки)", &self.main_doc)?;

        let main_fuel_liters = parse_numeric_field("количество (основные баки)", &self.main_qty)?;
        let main_fuel_density =
            parse_numeric_field("плотность (основные баки)", &self.main_density)?;

        let aux = if self.aux_used {
            require_non_empty("количество (концевые баки)", &self.aux_qty)?;
            require_non_empty("плотность (концевые баки)", &self.aux_density)?;
            require_non_empty("документ (концевые баки)", &self.aux_doc)?;

            Some(AuxRefueling {
                liters: parse_numeric_field("количество (концевые баки)", &self.aux_qty)?,
                density: parse_numeric_field("плотность (концевые баки)", &self.aux_density)?,
                doc_ref: self.aux_doc.trim().to_string(),
            })
        } else {
            None
        };

        Ok(CalculationInput {
            ground_minutes,
            air_minutes,
            main_fuel_liters,
            main_fuel_density,
            main_doc_ref: self.main_doc.trim().to_string(),
            aux,
        })
    }

    /// Resets every field to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field.to_string()));
    }
    Ok(())
}

fn parse_numeric_field(field: &str, value: &str) -> Result<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| Error::Format(format!("{}: '{}'", field, value.trim())))?;
    if !parsed.is_finite() {
        return Err(Error::Format(format!("{}: '{}'", field, value.trim())));
    }
    Ok(parsed)
}

fn parse_time_field(field: &str, value: &str) -> Result<f64> {
    let minutes = parse_flight_minutes(value)
        .map_err(|_| Error::Format(format!("{}: '{}'", field, value.trim())))?;
    // Negative plain minutes parse fine but make no sense in a log
    if !minutes.is_finite() || minutes < 0.0 {
        return Err(Error::Format(format!("{}: '{}'", field, value.trim())));
    }
    Ok(minutes)
}
