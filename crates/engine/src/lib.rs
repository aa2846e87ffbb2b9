//! Weight and balance engine.
//!
//! Combines the catalog, balance arithmetic, fuel-burn projection, and
//! envelope test into a single computation: given station weights, fuel, and
//! a flight-time estimate, produce the takeoff and estimated-landing
//! conditions. The engine is a pure function over an immutable profile;
//! callers resolve the profile from the catalog and own the result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wb_catalog::{AircraftProfile, PowerSetting, SeatingLayout, Station};
use wb_core::balance::{self, BalanceError};
use wb_core::units::{kg_to_liters, liters_to_kg};
use wb_envelope::is_within_envelope;
use wb_fuel::FuelError;

/// Unit of the fuel quantity supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelUnit {
    Liters,
    Kg,
}

/// Loadable station identifiers. Empty weight and fuel are not stations;
/// their moments are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StationId {
    PilotFront,
    PassengerRear,
    PassengerBack,
    Baggage,
}

/// Per-calculation load input. Station weights are kilograms; per-station
/// maxima are the caller's responsibility, non-negativity is re-checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLoadInput {
    pub pilot_front_kg: f64,
    pub passenger_rear_kg: f64,
    pub passenger_back_kg: f64,
    pub baggage_kg: f64,
    pub fuel_amount: f64,
    pub fuel_unit: FuelUnit,
    pub flight_time_minutes: f64,
    pub power_setting: PowerSetting,
}

/// One computed loading condition (takeoff or estimated landing).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadCondition {
    pub total_weight_kg: f64,
    pub cg_m: f64,
    pub within_envelope: bool,
    pub empty_moment: f64,
    pub fuel_moment: f64,
    pub station_moments: BTreeMap<StationId, f64>,
}

/// Engine output: both conditions plus the landing-fuel summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightBalanceResult {
    pub takeoff: LoadCondition,
    pub landing: LoadCondition,
    pub fuel_remaining_liters: f64,
    pub has_minimum_reserve: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("invalid input: {field} must be {requirement}, got {value}")]
    InvalidInput {
        field: &'static str,
        requirement: &'static str,
        value: f64,
    },
    #[error("fuel projection failed: {0}")]
    Fuel(#[from] FuelError),
    #[error("balance computation failed: {0}")]
    Balance(#[from] BalanceError),
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
    if value < 0.0 {
        return Err(EngineError::InvalidInput {
            field,
            requirement: "non-negative",
            value,
        });
    }
    Ok(())
}

fn validate(input: &FlightLoadInput) -> Result<(), EngineError> {
    require_non_negative("pilot_front_kg", input.pilot_front_kg)?;
    require_non_negative("passenger_rear_kg", input.passenger_rear_kg)?;
    require_non_negative("passenger_back_kg", input.passenger_back_kg)?;
    require_non_negative("baggage_kg", input.baggage_kg)?;
    require_non_negative("fuel_amount", input.fuel_amount)?;
    if input.flight_time_minutes <= 0.0 {
        return Err(EngineError::InvalidInput {
            field: "flight_time_minutes",
            requirement: "positive",
            value: input.flight_time_minutes,
        });
    }
    Ok(())
}

/// Stations occupied under the profile's seating layout, with the weight the
/// caller supplied for each. Stations absent from the layout are excluded
/// outright so mixed inputs cannot double count.
fn occupied_stations(
    profile: &AircraftProfile,
    input: &FlightLoadInput,
) -> Vec<(StationId, f64, Station)> {
    let mut stations = vec![(StationId::PilotFront, input.pilot_front_kg, profile.pilot_front)];
    match profile.seating {
        SeatingLayout::Standard { passenger_rear } => {
            stations.push((StationId::PassengerRear, input.passenger_rear_kg, passenger_rear));
        }
        SeatingLayout::Tandem { passenger_back } => {
            stations.push((StationId::PassengerBack, input.passenger_back_kg, passenger_back));
        }
        SeatingLayout::SixSeat {
            passenger_rear,
            passenger_back,
        } => {
            stations.push((StationId::PassengerRear, input.passenger_rear_kg, passenger_rear));
            stations.push((StationId::PassengerBack, input.passenger_back_kg, passenger_back));
        }
    }
    stations.push((StationId::Baggage, input.baggage_kg, profile.baggage));
    stations
}

fn condition(
    profile: &AircraftProfile,
    station_moments: &BTreeMap<StationId, f64>,
    payload_kg: f64,
    fuel_kg: f64,
) -> Result<LoadCondition, EngineError> {
    let empty_moment = balance::moment(profile.basic_empty_weight_kg, profile.empty_weight_arm_m);
    let fuel_moment = balance::moment(fuel_kg, profile.fuel.arm_m);

    let total_weight_kg = profile.basic_empty_weight_kg + payload_kg + fuel_kg;
    let total_moment =
        empty_moment + fuel_moment + station_moments.values().sum::<f64>();
    let cg_m = balance::center_of_gravity(total_weight_kg, total_moment)?;

    Ok(LoadCondition {
        total_weight_kg,
        cg_m,
        within_envelope: is_within_envelope(profile, total_weight_kg, cg_m),
        empty_moment,
        fuel_moment,
        station_moments: station_moments.clone(),
    })
}

/// Compute takeoff and estimated-landing weight and balance for one load.
pub fn compute(
    profile: &AircraftProfile,
    input: &FlightLoadInput,
) -> Result<WeightBalanceResult, EngineError> {
    validate(input)?;

    let takeoff_fuel_kg = match input.fuel_unit {
        FuelUnit::Kg => input.fuel_amount,
        FuelUnit::Liters => liters_to_kg(input.fuel_amount, profile.fuel.kg_per_liter),
    };

    let stations = occupied_stations(profile, input);
    let payload_kg: f64 = stations.iter().map(|(_, weight, _)| weight).sum();
    let station_moments: BTreeMap<StationId, f64> = stations
        .iter()
        .map(|(id, weight, station)| (*id, balance::moment(*weight, station.arm_m)))
        .collect();

    let takeoff = condition(profile, &station_moments, payload_kg, takeoff_fuel_kg)?;

    let landing_fuel_kg = wb_fuel::project_landing_fuel(
        profile,
        takeoff_fuel_kg,
        input.flight_time_minutes,
        input.power_setting,
    )?;
    // Only the fuel moment changes between takeoff and landing.
    let landing = condition(profile, &station_moments, payload_kg, landing_fuel_kg)?;

    Ok(WeightBalanceResult {
        takeoff,
        landing,
        fuel_remaining_liters: kg_to_liters(landing_fuel_kg, profile.fuel.kg_per_liter),
        has_minimum_reserve: wb_fuel::has_minimum_reserve(profile, landing_fuel_kg),
    })
}
