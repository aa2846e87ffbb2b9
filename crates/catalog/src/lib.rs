//! Aircraft catalog: per-aircraft mass, arm, envelope, and performance data.
//!
//! The catalog is reference data: built once at startup, read-only afterwards.
//! Profiles come either from [`AircraftCatalog::builtin`] or from YAML/TOML
//! files via [`config::load_catalog`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wb_core::units::SpeedUnit;

pub mod builtin;
pub mod config;

pub use config::{load_catalog, load_profiles};

/// A named load position with a fixed arm and a placarded weight limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub arm_m: f64,
    pub max_weight_kg: f64,
}

/// The fuel system: arm, tank capacities, and aircraft-specific fuel density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelStation {
    pub arm_m: f64,
    pub max_liters: f64,
    pub standard_liters: f64,
    pub kg_per_liter: f64,
}

/// Seating arrangement, fixed per aircraft variant. The engine enumerates
/// occupied stations from this tag rather than probing optional fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SeatingLayout {
    /// Four seats: front row plus one rear bench.
    Standard { passenger_rear: Station },
    /// Two seats in line, rear seat behind the pilot.
    Tandem { passenger_back: Station },
    /// Six seats: front row, middle bench, third-row bench.
    SixSeat {
        passenger_rear: Station,
        passenger_back: Station,
    },
}

/// One vertex of the certified envelope polygon, CG on the x axis and weight
/// on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub cg_m: f64,
    pub weight_kg: f64,
}

/// Certified weight/CG envelope: a closed polygon plus rectangular limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Closed boundary: the first vertex is repeated as the last.
    pub boundary: Vec<EnvelopePoint>,
    pub min_weight_kg: f64,
    pub max_weight_kg: f64,
    pub forward_cg_m: f64,
    pub aft_cg_m: f64,
}

/// Cruise power setting as published in the flight manual tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PowerSetting {
    #[serde(rename = "55%")]
    Cruise55,
    #[serde(rename = "65%")]
    Cruise65,
    #[serde(rename = "75%")]
    Cruise75,
}

impl std::fmt::Display for PowerSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerSetting::Cruise55 => write!(f, "55%"),
            PowerSetting::Cruise65 => write!(f, "65%"),
            PowerSetting::Cruise75 => write!(f, "75%"),
        }
    }
}

/// One row of the cruise consumption table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruisePerformance {
    pub power_setting: PowerSetting,
    pub liters_per_hour: f64,
    pub true_airspeed: f64,
    pub speed_unit: SpeedUnit,
}

/// Fuel burned between engine start and takeoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxiFuel {
    pub liters: f64,
    pub time_minutes: f64,
}

/// Minimum fuel expected at landing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReserveFuel {
    pub minimum_minutes: f64,
    pub recommended_liters: f64,
}

/// Flight-manual performance figures carried alongside the balance data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub cruise: Vec<CruisePerformance>,
    pub taxi_fuel: TaxiFuel,
    pub reserve_fuel: ReserveFuel,
    pub speed_unit: SpeedUnit,
    pub stall_speed_clean: f64,
    pub stall_speed_landing: f64,
    pub best_climb_speed: f64,
    pub approach_speed_normal: f64,
    pub max_demo_crosswind_kt: f64,
}

/// Immutable per-aircraft reference data, looked up by registration id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftProfile {
    pub type_name: String,
    pub basic_empty_weight_kg: f64,
    /// Arm of the basic empty weight aft of the reference datum. A fixed
    /// constant of the weighing report, not a loadable station.
    pub empty_weight_arm_m: f64,
    pub max_takeoff_weight_kg: f64,
    pub max_baggage_kg: f64,
    pub pilot_front: Station,
    pub baggage: Station,
    pub seating: SeatingLayout,
    pub fuel: FuelStation,
    pub envelope: Envelope,
    pub performance: Performance,
}

impl AircraftProfile {
    /// Passenger-rear station, where the seating layout has one.
    pub fn passenger_rear(&self) -> Option<Station> {
        match self.seating {
            SeatingLayout::Standard { passenger_rear }
            | SeatingLayout::SixSeat { passenger_rear, .. } => Some(passenger_rear),
            SeatingLayout::Tandem { .. } => None,
        }
    }

    /// Passenger-back station (tandem rear seat or third row), where present.
    pub fn passenger_back(&self) -> Option<Station> {
        match self.seating {
            SeatingLayout::Tandem { passenger_back }
            | SeatingLayout::SixSeat { passenger_back, .. } => Some(passenger_back),
            SeatingLayout::Standard { .. } => None,
        }
    }

    /// Check the catalog invariants for this profile.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::Invalid {
            aircraft: self.type_name.clone(),
            reason: reason.to_string(),
        };

        if self.basic_empty_weight_kg <= 0.0 {
            return Err(invalid("basic empty weight must be positive"));
        }
        let mut arms = vec![self.empty_weight_arm_m, self.pilot_front.arm_m, self.baggage.arm_m];
        let mut limits = vec![
            self.max_takeoff_weight_kg,
            self.max_baggage_kg,
            self.pilot_front.max_weight_kg,
            self.baggage.max_weight_kg,
        ];
        if let Some(station) = self.passenger_rear() {
            arms.push(station.arm_m);
            limits.push(station.max_weight_kg);
        }
        if let Some(station) = self.passenger_back() {
            arms.push(station.arm_m);
            limits.push(station.max_weight_kg);
        }
        arms.push(self.fuel.arm_m);
        if arms.iter().any(|arm| *arm < 0.0) {
            return Err(invalid("station arms must be non-negative"));
        }
        if limits.iter().any(|w| *w < 0.0) {
            return Err(invalid("weight limits must be non-negative"));
        }
        if self.fuel.kg_per_liter <= 0.0 {
            return Err(invalid("fuel density must be positive"));
        }
        if self.fuel.standard_liters > self.fuel.max_liters {
            return Err(invalid("standard fuel exceeds tank capacity"));
        }

        let envelope = &self.envelope;
        if envelope.boundary.len() < 4 {
            return Err(invalid("envelope polygon needs at least three vertices"));
        }
        let first = envelope.boundary.first().copied();
        let last = envelope.boundary.last().copied();
        if first != last {
            return Err(invalid("envelope polygon must be closed"));
        }
        if envelope.min_weight_kg > envelope.max_weight_kg {
            return Err(invalid("envelope min weight exceeds max weight"));
        }
        if envelope.forward_cg_m > envelope.aft_cg_m {
            return Err(invalid("forward CG limit lies aft of the aft limit"));
        }

        if self.performance.cruise.is_empty() {
            return Err(invalid("cruise consumption table is empty"));
        }
        Ok(())
    }
}

/// Errors raised when building or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("aircraft '{0}' not found in catalog")]
    UnknownAircraft(String),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid profile for {aircraft}: {reason}")]
    Invalid { aircraft: String, reason: String },
}

/// Read-only lookup table of aircraft profiles keyed by registration id.
#[derive(Debug, Clone)]
pub struct AircraftCatalog {
    profiles: BTreeMap<String, AircraftProfile>,
}

impl AircraftCatalog {
    /// Build a catalog from validated profiles keyed by registration id.
    pub fn from_profiles<I>(profiles: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, AircraftProfile)>,
    {
        let profiles: BTreeMap<String, AircraftProfile> = profiles.into_iter().collect();
        for profile in profiles.values() {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// The catalog of club aircraft shipped with the calculator.
    pub fn builtin() -> Self {
        Self {
            profiles: builtin::profiles(),
        }
    }

    /// Look up a profile by registration id, e.g. `"C172S (SE-MIA)"`.
    pub fn get(&self, id: &str) -> Result<&AircraftProfile, CatalogError> {
        self.profiles
            .get(id)
            .ok_or_else(|| CatalogError::UnknownAircraft(id.to_string()))
    }

    /// Registration ids in stable (sorted) order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
