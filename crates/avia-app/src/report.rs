//! Display-ready fuel balance report
//!
//! Mirrors the read-only summary table of the paper flight log: every value
//! is pre-formatted as a string, with `-` standing in for cells that do not
//! apply (aux tank rows when no aux tanks were filled, the drained-fuel
//! document which never has one).

use avia_domain::constants::{FINAL_FUEL_KG, INITIAL_FUEL_KG};
use avia_domain::model::{CalculationInput, FuelBalance};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A computed flight log summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelReport {
    /// Calculation date, dd.MM.yyyy
    pub date: String,
    /// Taxiing time, whole minutes
    pub ground_minutes: String,
    /// Airborne time, whole minutes
    pub air_minutes: String,
    /// Main tank fuel density
    pub density: String,
    /// Fuel before the flight (book constant)
    pub before_flight: String,
    /// Refueled into aux tanks before departure, or "-"
    pub refueled_before: String,
    /// Aux refueling document, or "-"
    pub refueled_before_doc: String,
    /// Drained before the flight
    pub drained_before: String,
    /// Drained fuel document (always "-")
    pub drained_doc: String,
    /// Fuel before engine start
    pub before_start: String,
    /// Consumed during the flight
    pub consumed: String,
    /// Refueled into main tanks after the flight
    pub refueled_after: String,
    /// Main refueling document
    pub refueled_after_doc: String,
    /// Fuel after the flight (book constant)
    pub after_flight: String,
    /// Prescribed consumption for the flight times
    pub prescribed: String,
    /// Prescribed minus actual consumption
    pub economy: String,
}

impl FuelReport {
    /// Builds the report for today's date.
    pub fn build(input: &CalculationInput, balance: &FuelBalance) -> Self {
        Self::build_dated(input, balance, Local::now().date_naive())
    }

    /// Builds the report for an explicit date.
    pub fn build_dated(input: &CalculationInput, balance: &FuelBalance, date: NaiveDate) -> Self {
        let (refueled_before, refueled_before_doc) = match input.aux {
            Some(ref aux) => (
                format!("{:.1}", balance.aux_fuel_kg),
                aux.doc_ref.clone(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        Self {
            date: date.format("%d.%m.%Y").to_string(),
            ground_minutes: format!("{:.0}", input.ground_minutes),
            air_minutes: format!("{:.0}", input.air_minutes),
            density: format!("{:.3}", input.main_fuel_density),
            before_flight: format!("{:.0}", INITIAL_FUEL_KG),
            refueled_before,
            refueled_before_doc,
            drained_before: format!("{:.0}", balance.drain_before_flight_kg),
            drained_doc: "-".to_string(),
            before_start: format!("{:.1}", balance.fuel_before_start_kg),
            consumed: format!("{:.1}", balance.consumed_in_flight_kg),
            refueled_after: format!("{:.1}", balance.main_fuel_kg),
            refueled_after_doc: input.main_doc_ref.clone(),
            after_flight: format!("{:.0}", FINAL_FUEL_KG),
            prescribed: format!("{:.1}", balance.prescribed_consumption_kg),
            economy: format!("{:.1}", balance.economy_kg),
        }
    }

    /// Labeled rows in log sheet order, for table rendering.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Дата", self.date.as_str()),
            ("Наземное время, мин", self.ground_minutes.as_str()),
            ("Полётное время, мин", self.air_minutes.as_str()),
            ("Плотность, кг/л", self.density.as_str()),
            ("Остаток перед полётом, кг", self.before_flight.as_str()),
            ("Заправлено перед вылетом, кг", self.refueled_before.as_str()),
            ("Документ (заправка)", self.refueled_before_doc.as_str()),
            ("Слито перед вылетом, кг", self.drained_before.as_str()),
            ("Документ (слив)", self.drained_doc.as_str()),
            ("Остаток перед запуском, кг", self.before_start.as_str()),
            ("Израсходовано в полёте, кг", self.consumed.as_str()),
            ("Заправлено после полёта, кг", self.refueled_after.as_str()),
            ("Документ (заправка)", self.refueled_after_doc.as_str()),
            ("Остаток после полёта, кг", self.after_flight.as_str()),
            ("Положенный расход, кг", self.prescribed.as_str()),
            ("Экономия, кг", self.economy.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avia_domain::model::AuxRefueling;
    use avia_domain::service::compute_fuel_balance;

    fn report_for(input: &CalculationInput) -> FuelReport {
        let balance = compute_fuel_balance(input).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        FuelReport::build_dated(input, &balance, date)
    }

    fn main_only_input() -> CalculationInput {
        CalculationInput {
            ground_minutes: 30.0,
            air_minutes: 60.0,
            main_fuel_liters: 600.0,
            main_fuel_density: 0.8,
            main_doc_ref: "ТР-104".to_string(),
            aux: None,
        }
    }

    #[test]
    fn test_main_only_formatting() {
        let report = report_for(&main_only_input());

        assert_eq!(report.date, "23.08.2026");
        assert_eq!(report.ground_minutes, "30");
        assert_eq!(report.air_minutes, "60");
        assert_eq!(report.density, "0.800");
        assert_eq!(report.before_flight, "1000");
        assert_eq!(report.refueled_before, "-");
        assert_eq!(report.refueled_before_doc, "-");
        assert_eq!(report.drained_before, "4");
        assert_eq!(report.drained_doc, "-");
        assert_eq!(report.before_start, "996.0");
        assert_eq!(report.consumed, "476.0");
        assert_eq!(report.refueled_after, "480.0");
        assert_eq!(report.refueled_after_doc, "ТР-104");
        assert_eq!(report.after_flight, "1000");
        assert_eq!(report.prescribed, "417.5");
        assert_eq!(report.economy, "-58.5");
    }

    #[test]
    fn test_aux_rows_filled_when_used() {
        let input = CalculationInput {
            aux: Some(AuxRefueling {
                liters: 50.0,
                density: 0.8,
                doc_ref: "ТР-105".to_string(),
            }),
            ..main_only_input()
        };
        let report = report_for(&input);

        assert_eq!(report.refueled_before, "40.0");
        assert_eq!(report.refueled_before_doc, "ТР-105");
        assert_eq!(report.drained_before, "8");
        assert_eq!(report.before_start, "1032.0");
    }

    #[test]
    fn test_rows_cover_every_field() {
        let report = report_for(&main_only_input());
        let rows = report.rows();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0], ("Дата", "23.08.2026"));
        assert_eq!(rows[15], ("Экономия, кг", "-58.5"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = report_for(&main_only_input());
        let json = serde_json::to_string(&report).unwrap();
        let back: FuelReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
