//! End-to-end tests: raw form strings through validation, calculation,
//! and report formatting.

use avia_app::{FlightLogForm, FuelReport};
use avia_domain::service::compute_fuel_balance;
use avia_types::Error;
use chrono::NaiveDate;

fn base_form() -> FlightLogForm {
    FlightLogForm {
        ground_time: "0-30".to_string(),
        air_time: "1:00".to_string(),
        main_qty: "600".to_string(),
        main_density: "0.8".to_string(),
        main_doc: "ТР-104".to_string(),
        ..FlightLogForm::default()
    }
}

fn compute_report(form: &FlightLogForm) -> FuelReport {
    let input = form.parse().expect("form should validate");
    let balance = compute_fuel_balance(&input).expect("calculation should succeed");
    let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
    FuelReport::build_dated(&input, &balance, date)
}

#[test]
fn test_main_only_flight() {
    let report = compute_report(&base_form());

    assert_eq!(report.ground_minutes, "30");
    assert_eq!(report.air_minutes, "60");
    assert_eq!(report.refueled_after, "480.0");
    assert_eq!(report.drained_before, "4");
    assert_eq!(report.consumed, "476.0");
    assert_eq!(report.prescribed, "417.5");
    assert_eq!(report.economy, "-58.5");
    assert_eq!(report.refueled_before, "-");
    assert_eq!(report.refueled_before_doc, "-");
}

#[test]
fn test_flight_with_aux_tanks() {
    let form = FlightLogForm {
        aux_used: true,
        aux_qty: "50".to_string(),
        aux_density: "0.8".to_string(),
        aux_doc: "ТР-105".to_string(),
        ..base_form()
    };
    let report = compute_report(&form);

    assert_eq!(report.refueled_before, "40.0");
    assert_eq!(report.refueled_before_doc, "ТР-105");
    assert_eq!(report.drained_before, "8");
    assert_eq!(report.before_start, "1032.0");
    // main 480 + aux 40 - drain 8
    assert_eq!(report.consumed, "512.0");
}

#[test]
fn test_bare_minute_times() {
    let form = FlightLogForm {
        ground_time: "45".to_string(),
        air_time: String::new(),
        ..base_form()
    };
    let report = compute_report(&form);

    assert_eq!(report.ground_minutes, "45");
    assert_eq!(report.air_minutes, "0");
}

#[test]
fn test_missing_main_doc_stops_calculation() {
    let form = FlightLogForm {
        main_doc: String::new(),
        ..base_form()
    };
    assert!(matches!(form.parse(), Err(Error::MissingField(_))));
}

#[test]
fn test_bad_time_format_stops_calculation() {
    let form = FlightLogForm {
        ground_time: "1:2:3".to_string(),
        ..base_form()
    };
    assert!(matches!(form.parse(), Err(Error::Format(_))));
}

#[test]
fn test_json_report_is_stable() {
    let report = compute_report(&base_form());
    let json = serde_json::to_string_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["economy"], "-58.5");
    assert_eq!(value["before_flight"], "1000");
    assert_eq!(value["after_flight"], "1000");
}
