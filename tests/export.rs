use weight_balance_calculator::catalog::{AircraftCatalog, PowerSetting};
use weight_balance_calculator::engine::{FlightLoadInput, FuelUnit, compute};
use weight_balance_calculator::export::{LoadsheetReport, write_csv, write_json};

fn sample() -> (String, FlightLoadInput) {
    (
        "C172S (SE-MIA)".to_string(),
        FlightLoadInput {
            pilot_front_kg: 85.0,
            passenger_rear_kg: 70.0,
            passenger_back_kg: 0.0,
            baggage_kg: 10.0,
            fuel_amount: 132.0,
            fuel_unit: FuelUnit::Liters,
            flight_time_minutes: 90.0,
            power_setting: PowerSetting::Cruise65,
        },
    )
}

#[test]
fn json_loadsheet_round_trips() {
    let catalog = AircraftCatalog::builtin();
    let (id, input) = sample();
    let profile = catalog.get(&id).expect("C172S");
    let result = compute(profile, &input).expect("compute");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("artifacts").join("loadsheet.json");
    let report = LoadsheetReport::new(&id, profile, &input, &result);
    write_json(&path, &report).expect("write json");

    let contents = std::fs::read_to_string(&path).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&contents).expect("parse json");
    assert_eq!(value["aircraft_id"], "C172S (SE-MIA)");
    assert_eq!(value["type_name"], "Cessna 172S");
    assert_eq!(value["power_setting"], "65%");
    assert_eq!(value["takeoff"]["within_envelope"], true);
    let takeoff_weight = value["takeoff"]["total_weight_kg"].as_f64().expect("weight");
    assert!((takeoff_weight - result.takeoff.total_weight_kg).abs() < 1e-9);
    assert!(value["generated_utc"].as_str().expect("timestamp").contains('T'));
}

#[test]
fn csv_table_has_takeoff_and_landing_rows() {
    let catalog = AircraftCatalog::builtin();
    let (id, input) = sample();
    let profile = catalog.get(&id).expect("C172S");
    let result = compute(profile, &input).expect("compute");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("conditions.csv");
    write_csv(&path, &result).expect("write csv");

    let contents = std::fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "phase,total_weight_kg,cg_m,within_envelope,empty_moment,fuel_moment,station_moment_sum"
    );
    assert!(lines[1].starts_with("takeoff,"));
    assert!(lines[2].starts_with("landing,"));
}
