//! Fuel balance calculation for the flight log

use avia_types::{Error, Result};

use crate::constants::{
    AIR_RATE_KG_PER_HOUR, DRAIN_WITHOUT_AUX_KG, DRAIN_WITH_AUX_KG, GROUND_RATE_KG_PER_HOUR,
    INITIAL_FUEL_KG,
};
use crate::model::{CalculationInput, FuelBalance};

/// Computes all derived fuel balance figures from a validated input.
///
/// Deterministic: the same input always produces the same output. The only
/// checks performed here are numeric sanity guards; format and non-empty
/// validation belongs to the form layer.
pub fn compute_fuel_balance(input: &CalculationInput) -> Result<FuelBalance> {
    check_non_negative("ground_minutes", input.ground_minutes)?;
    check_non_negative("air_minutes", input.air_minutes)?;
    check_positive("main_fuel_liters", input.main_fuel_liters)?;
    check_positive("main_fuel_density", input.main_fuel_density)?;
    if let Some(ref aux) = input.aux {
        check_non_negative("aux_fuel_liters", aux.liters)?;
        check_non_negative("aux_fuel_density", aux.density)?;
    }

    let main_fuel_kg = input.main_fuel_liters * input.main_fuel_density;

    let (aux_fuel_kg, drain_before_flight_kg) = match input.aux {
        Some(ref aux) => (aux.liters * aux.density, DRAIN_WITH_AUX_KG),
        None => (0.0, DRAIN_WITHOUT_AUX_KG),
    };

    let fuel_before_start_kg = INITIAL_FUEL_KG + aux_fuel_kg - drain_before_flight_kg;

    let consumed_in_flight_kg = if input.aux_tank_used() {
        main_fuel_kg + aux_fuel_kg - DRAIN_WITH_AUX_KG
    } else {
        main_fuel_kg - DRAIN_WITHOUT_AUX_KG
    };

    let ground_consumption_kg = (GROUND_RATE_KG_PER_HOUR / 60.0) * input.ground_minutes;
    let air_consumption_kg = (AIR_RATE_KG_PER_HOUR / 60.0) * input.air_minutes;
    let prescribed_consumption_kg = ground_consumption_kg + air_consumption_kg;
    let economy_kg = prescribed_consumption_kg - consumed_in_flight_kg;

    Ok(FuelBalance {
        main_fuel_kg,
        aux_fuel_kg,
        drain_before_flight_kg,
        fuel_before_start_kg,
        consumed_in_flight_kg,
        ground_consumption_kg,
        air_consumption_kg,
        prescribed_consumption_kg,
        economy_kg,
    })
}

fn check_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{} must be a positive number, got {}",
            field, value
        )));
    }
    Ok(())
}
