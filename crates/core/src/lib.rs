//! Core units, conversions, and balance arithmetic shared across the workspace.

/// Conversion constants. Masses are kilograms and arms metres throughout the
/// workspace unless a name says otherwise.
pub mod constants {
    /// Knots indicated airspeed per statute mile per hour.
    pub const KIAS_PER_MPH: f64 = 0.868976;
    /// Minutes per hour, for fuel-burn projections over flight time.
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Basic unit conversion helpers. All are pure; none reject negative input,
/// which is treated as a caller error rather than validated here.
pub mod units {
    use serde::{Deserialize, Serialize};

    use super::constants::KIAS_PER_MPH;

    /// Airspeed unit used by an aircraft's instrumentation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum SpeedUnit {
        #[serde(rename = "KIAS")]
        Kias,
        #[serde(rename = "MPH")]
        Mph,
    }

    impl std::fmt::Display for SpeedUnit {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                SpeedUnit::Kias => write!(f, "KIAS"),
                SpeedUnit::Mph => write!(f, "MPH"),
            }
        }
    }

    /// Convert a fuel volume to mass using the aircraft's own density.
    #[inline]
    pub fn liters_to_kg(liters: f64, kg_per_liter: f64) -> f64 {
        liters * kg_per_liter
    }

    /// Convert a fuel mass back to volume using the aircraft's own density.
    #[inline]
    pub fn kg_to_liters(kg: f64, kg_per_liter: f64) -> f64 {
        kg / kg_per_liter
    }

    /// Convert statute miles per hour to knots indicated airspeed.
    #[inline]
    pub fn mph_to_kias(mph: f64) -> f64 {
        mph * KIAS_PER_MPH
    }

    /// Convert knots indicated airspeed to statute miles per hour.
    #[inline]
    pub fn kias_to_mph(kias: f64) -> f64 {
        kias / KIAS_PER_MPH
    }

    /// Re-express a speed in the requested unit.
    pub fn speed_in_unit(speed: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
        match (from, to) {
            (SpeedUnit::Mph, SpeedUnit::Kias) => mph_to_kias(speed),
            (SpeedUnit::Kias, SpeedUnit::Mph) => kias_to_mph(speed),
            _ => speed,
        }
    }
}

/// Time helpers shared by the fuel projector and the CLI report.
pub mod time {
    use super::constants::MINUTES_PER_HOUR;

    /// Convert minutes to hours.
    #[inline]
    pub fn minutes_to_hours(minutes: f64) -> f64 {
        minutes / MINUTES_PER_HOUR
    }

    /// Format a minute count as `h:mm`.
    pub fn format_minutes(minutes: u32) -> String {
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }
}

/// Moment and centre-of-gravity arithmetic.
pub mod balance {
    use thiserror::Error;

    /// Arithmetic failures in balance computations.
    #[derive(Debug, Error, PartialEq, Eq)]
    pub enum BalanceError {
        #[error("center of gravity is undefined for zero total weight")]
        DivisionUndefined,
    }

    /// Moment of a mass about the reference datum.
    #[inline]
    pub fn moment(weight_kg: f64, arm_m: f64) -> f64 {
        weight_kg * arm_m
    }

    /// Centre of gravity as total moment over total weight.
    ///
    /// Basic empty weight is strictly positive for every catalog aircraft, so
    /// the zero-weight case is reachable only through malformed custom data.
    pub fn center_of_gravity(total_weight_kg: f64, total_moment: f64) -> Result<f64, BalanceError> {
        if total_weight_kg == 0.0 {
            return Err(BalanceError::DivisionUndefined);
        }
        Ok(total_moment / total_weight_kg)
    }
}
