use weight_balance_calculator::catalog::{AircraftCatalog, AircraftProfile, PowerSetting};
use weight_balance_calculator::fuel::{
    FuelError, cruise_rate, endurance_minutes, has_minimum_reserve, project_landing_fuel,
};

fn c172s() -> AircraftProfile {
    AircraftCatalog::builtin()
        .get("C172S (SE-MIA)")
        .expect("builtin C172S")
        .clone()
}

#[test]
fn sixty_minutes_at_65_percent() {
    // 132 L at 0.72 kg/L on board; 34.4 L trip + 4.2 L taxi burned.
    let profile = c172s();
    let takeoff_fuel_kg = 132.0 * 0.72;
    let landing = project_landing_fuel(&profile, takeoff_fuel_kg, 60.0, PowerSetting::Cruise65)
        .expect("projection");

    assert!((landing - (95.04 - 38.6 * 0.72)).abs() < 1e-9);
    let landing_liters = landing / 0.72;
    assert!((landing_liters - 93.4).abs() < 0.1);
    assert!(has_minimum_reserve(&profile, landing));
}

#[test]
fn projection_is_monotonically_non_increasing_in_time() {
    let profile = c172s();
    let takeoff_fuel_kg = 95.04;
    let mut previous = f64::INFINITY;
    for minutes in [30.0, 60.0, 90.0, 180.0, 360.0, 600.0] {
        let landing = project_landing_fuel(&profile, takeoff_fuel_kg, minutes, PowerSetting::Cruise75)
            .expect("projection");
        assert!(landing <= previous);
        assert!(landing >= 0.0);
        previous = landing;
    }
}

#[test]
fn exhaustion_clamps_to_zero() {
    let profile = c172s();
    let landing = project_landing_fuel(&profile, 10.0, 600.0, PowerSetting::Cruise75)
        .expect("projection");
    assert_eq!(landing, 0.0);
    assert!(!has_minimum_reserve(&profile, landing));
}

#[test]
fn unknown_power_setting_is_rejected() {
    let mut profile = c172s();
    profile.performance.cruise.retain(|row| row.power_setting != PowerSetting::Cruise75);

    assert_eq!(
        cruise_rate(&profile, PowerSetting::Cruise75).err(),
        Some(FuelError::UnknownPowerSetting(PowerSetting::Cruise75))
    );
    assert!(project_landing_fuel(&profile, 95.0, 60.0, PowerSetting::Cruise75).is_err());
}

#[test]
fn endurance_inverts_projection() {
    let profile = c172s();
    let takeoff_fuel_kg = 95.04;
    let minutes = endurance_minutes(&profile, takeoff_fuel_kg, PowerSetting::Cruise65)
        .expect("endurance");

    // Flying exactly the endurance leaves the tanks dry.
    let landing = project_landing_fuel(&profile, takeoff_fuel_kg, minutes, PowerSetting::Cruise65)
        .expect("projection");
    assert!(landing.abs() < 1e-9);
}

#[test]
fn taxi_burn_applies_even_for_short_flights() {
    let profile = c172s();
    let takeoff_fuel_kg = 95.04;
    let one_minute = project_landing_fuel(&profile, takeoff_fuel_kg, 1.0, PowerSetting::Cruise55)
        .expect("projection");
    let consumed_liters = (takeoff_fuel_kg - one_minute) / 0.72;
    assert!(consumed_liters > profile.performance.taxi_fuel.liters);
}
