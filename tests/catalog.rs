use std::io::Write;

use weight_balance_calculator::catalog::{
    AircraftCatalog, AircraftProfile, CatalogError, SeatingLayout, config::AircraftConfig,
    load_catalog, load_profiles,
};

#[test]
fn builtin_profiles_satisfy_invariants() {
    let catalog = AircraftCatalog::builtin();
    assert_eq!(catalog.len(), 5);
    for id in catalog.identifiers() {
        let profile = catalog.get(id).expect("builtin profile");
        profile.validate().expect("builtin profile invariants");
    }
}

#[test]
fn unknown_aircraft_is_an_error() {
    let catalog = AircraftCatalog::builtin();
    match catalog.get("B737 (SE-XXX)") {
        Err(CatalogError::UnknownAircraft(id)) => assert_eq!(id, "B737 (SE-XXX)"),
        other => panic!("expected UnknownAircraft, got {other:?}"),
    }
}

#[test]
fn shipped_yaml_catalog_matches_builtin() {
    let loaded = load_catalog("configs/aircraft.yaml").expect("load shipped catalog");
    let builtin = AircraftCatalog::builtin();
    assert_eq!(loaded.len(), builtin.len());
    for id in builtin.identifiers() {
        assert_eq!(loaded.get(id).expect("loaded"), builtin.get(id).expect("builtin"));
    }
}

#[test]
fn toml_directory_loads_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cub.toml");
    let mut file = std::fs::File::create(&path).expect("create toml");
    write!(
        file,
        r#"
id = "PA18-150 (SE-GCG)"
type_name = "Piper PA-18-150 Super Cub"
basic_empty_weight_kg = 467.0
empty_weight_arm_m = 2.31
max_takeoff_weight_kg = 794.0
max_baggage_kg = 20.0
pilot_front = {{ arm_m = 2.16, max_weight_kg = 110.0 }}
passenger_back = {{ arm_m = 3.12, max_weight_kg = 110.0 }}
baggage = {{ arm_m = 3.68, max_weight_kg = 20.0 }}
fuel = {{ arm_m = 2.79, max_liters = 140.0, standard_liters = 88.0, kg_per_liter = 0.72 }}

[envelope]
min_weight_kg = 467.0
max_weight_kg = 794.0
forward_cg_m = 2.08
aft_cg_m = 2.54
boundary = [
    {{ cg_m = 2.08, weight_kg = 467.0 }},
    {{ cg_m = 2.08, weight_kg = 680.0 }},
    {{ cg_m = 2.39, weight_kg = 794.0 }},
    {{ cg_m = 2.54, weight_kg = 794.0 }},
    {{ cg_m = 2.54, weight_kg = 467.0 }},
    {{ cg_m = 2.08, weight_kg = 467.0 }},
]

[performance]
speed_unit = "MPH"
stall_speed_clean = 50.0
stall_speed_landing = 45.0
best_climb_speed = 69.0
approach_speed_normal = 63.0
max_demo_crosswind_kt = 15.0
taxi_fuel = {{ liters = 3.0, time_minutes = 10.0 }}
reserve_fuel = {{ minimum_minutes = 45.0, recommended_liters = 15.0 }}
cruise = [
    {{ power_setting = "55%", liters_per_hour = 18.0, true_airspeed = 98.0, speed_unit = "MPH" }},
    {{ power_setting = "65%", liters_per_hour = 22.0, true_airspeed = 109.0, speed_unit = "MPH" }},
    {{ power_setting = "75%", liters_per_hour = 26.0, true_airspeed = 117.0, speed_unit = "MPH" }},
]
"#
    )
    .expect("write toml");

    let records = load_profiles(dir.path()).expect("load toml dir");
    assert_eq!(records.len(), 1);

    let catalog = load_catalog(dir.path()).expect("catalog from toml dir");
    let loaded = catalog.get("PA18-150 (SE-GCG)").expect("cub");
    let builtin = AircraftCatalog::builtin();
    assert_eq!(loaded, builtin.get("PA18-150 (SE-GCG)").expect("builtin cub"));
}

fn yaml_profile(passenger_rear: bool, passenger_back: bool, standard_liters: f64) -> String {
    let mut doc = String::from(
        r#"
id: "TEST (SE-TST)"
type_name: "Test Aircraft"
basic_empty_weight_kg: 600
empty_weight_arm_m: 2.0
max_takeoff_weight_kg: 1000
max_baggage_kg: 20
pilot_front: { arm_m: 1.9, max_weight_kg: 200 }
baggage: { arm_m: 3.0, max_weight_kg: 20 }
"#,
    );
    if passenger_rear {
        doc.push_str("passenger_rear: { arm_m: 2.6, max_weight_kg: 200 }\n");
    }
    if passenger_back {
        doc.push_str("passenger_back: { arm_m: 3.2, max_weight_kg: 100 }\n");
    }
    doc.push_str(&format!(
        r#"fuel: {{ arm_m: 2.2, max_liters: 100, standard_liters: {standard_liters}, kg_per_liter: 0.72 }}
envelope:
  boundary:
    - {{ cg_m: 1.8, weight_kg: 600 }}
    - {{ cg_m: 1.8, weight_kg: 1000 }}
    - {{ cg_m: 2.5, weight_kg: 1000 }}
    - {{ cg_m: 2.5, weight_kg: 600 }}
    - {{ cg_m: 1.8, weight_kg: 600 }}
  min_weight_kg: 600
  max_weight_kg: 1000
  forward_cg_m: 1.8
  aft_cg_m: 2.5
performance:
  cruise:
    - {{ power_setting: "65%", liters_per_hour: 20, true_airspeed: 100, speed_unit: KIAS }}
  taxi_fuel: {{ liters: 3, time_minutes: 10 }}
  reserve_fuel: {{ minimum_minutes: 45, recommended_liters: 15 }}
  speed_unit: KIAS
  stall_speed_clean: 45
  stall_speed_landing: 40
  best_climb_speed: 70
  approach_speed_normal: 65
  max_demo_crosswind_kt: 15
"#
    ));
    doc
}

#[test]
fn both_passenger_stations_resolve_to_six_seat_layout() {
    let config: AircraftConfig =
        serde_yaml::from_str(&yaml_profile(true, true, 80.0)).expect("parse yaml");
    let profile = AircraftProfile::try_from(config).expect("convert");
    assert!(matches!(profile.seating, SeatingLayout::SixSeat { .. }));
    assert!(profile.passenger_rear().is_some());
    assert!(profile.passenger_back().is_some());
}

#[test]
fn missing_passenger_stations_are_rejected() {
    let config: AircraftConfig =
        serde_yaml::from_str(&yaml_profile(false, false, 80.0)).expect("parse yaml");
    assert!(matches!(
        AircraftProfile::try_from(config),
        Err(CatalogError::Invalid { .. })
    ));
}

#[test]
fn standard_fuel_above_capacity_is_rejected() {
    let config: AircraftConfig =
        serde_yaml::from_str(&yaml_profile(true, false, 150.0)).expect("parse yaml");
    match AircraftProfile::try_from(config) {
        Err(CatalogError::Invalid { reason, .. }) => {
            assert!(reason.contains("standard fuel"));
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}
