//! Fuel-burn projection: derive landing fuel from takeoff fuel, flight time,
//! and the power-setting-indexed consumption table, including taxi burn.

use thiserror::Error;
use wb_catalog::{AircraftProfile, CruisePerformance, PowerSetting};
use wb_core::time::minutes_to_hours;
use wb_core::units::{kg_to_liters, liters_to_kg};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FuelError {
    #[error("power setting {0} not found in the consumption table")]
    UnknownPowerSetting(PowerSetting),
}

/// Consumption-table row for a power setting. Exact match required.
pub fn cruise_rate(
    profile: &AircraftProfile,
    power_setting: PowerSetting,
) -> Result<&CruisePerformance, FuelError> {
    profile
        .performance
        .cruise
        .iter()
        .find(|row| row.power_setting == power_setting)
        .ok_or(FuelError::UnknownPowerSetting(power_setting))
}

/// Fuel volume consumed by a flight of the given duration at the given power
/// setting, taxi burn included.
pub fn total_consumed_liters(
    profile: &AircraftProfile,
    flight_time_minutes: f64,
    power_setting: PowerSetting,
) -> Result<f64, FuelError> {
    let rate = cruise_rate(profile, power_setting)?;
    let trip_liters = rate.liters_per_hour * minutes_to_hours(flight_time_minutes);
    Ok(trip_liters + profile.performance.taxi_fuel.liters)
}

/// Project the fuel mass remaining at landing.
///
/// Clamped at zero: the projection models full exhaustion without modelling
/// engine-out consequences.
pub fn project_landing_fuel(
    profile: &AircraftProfile,
    takeoff_fuel_kg: f64,
    flight_time_minutes: f64,
    power_setting: PowerSetting,
) -> Result<f64, FuelError> {
    let consumed_liters = total_consumed_liters(profile, flight_time_minutes, power_setting)?;
    let consumed_kg = liters_to_kg(consumed_liters, profile.fuel.kg_per_liter);
    Ok((takeoff_fuel_kg - consumed_kg).max(0.0))
}

/// Whether the landing fuel meets the recommended reserve for this aircraft.
pub fn has_minimum_reserve(profile: &AircraftProfile, landing_fuel_kg: f64) -> bool {
    let landing_liters = kg_to_liters(landing_fuel_kg, profile.fuel.kg_per_liter);
    landing_liters >= profile.performance.reserve_fuel.recommended_liters
}

/// How many minutes the given fuel mass lasts at the given power setting,
/// after subtracting taxi burn. The inverse of [`project_landing_fuel`].
pub fn endurance_minutes(
    profile: &AircraftProfile,
    fuel_kg: f64,
    power_setting: PowerSetting,
) -> Result<f64, FuelError> {
    let rate = cruise_rate(profile, power_setting)?;
    let usable_liters =
        kg_to_liters(fuel_kg, profile.fuel.kg_per_liter) - profile.performance.taxi_fuel.liters;
    Ok((usable_liters / rate.liters_per_hour * 60.0).max(0.0))
}
