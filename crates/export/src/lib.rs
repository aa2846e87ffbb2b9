//! Export helpers for loadsheet artifacts: a JSON sidecar with the full
//! computation and a flat CSV table of the two conditions.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;
use wb_catalog::AircraftProfile;
use wb_engine::{FlightLoadInput, LoadCondition, WeightBalanceResult};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Complete loadsheet, serialized as a JSON sidecar next to the printed report.
#[derive(Debug, Serialize)]
pub struct LoadsheetReport<'a> {
    pub aircraft_id: &'a str,
    pub type_name: &'a str,
    pub generated_utc: String,
    pub flight_time_minutes: f64,
    pub power_setting: String,
    pub takeoff: &'a LoadCondition,
    pub landing: &'a LoadCondition,
    pub fuel_remaining_liters: f64,
    pub has_minimum_reserve: bool,
}

impl<'a> LoadsheetReport<'a> {
    pub fn new(
        aircraft_id: &'a str,
        profile: &'a AircraftProfile,
        input: &FlightLoadInput,
        result: &'a WeightBalanceResult,
    ) -> Self {
        Self {
            aircraft_id,
            type_name: &profile.type_name,
            generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            flight_time_minutes: input.flight_time_minutes,
            power_setting: input.power_setting.to_string(),
            takeoff: &result.takeoff,
            landing: &result.landing,
            fuel_remaining_liters: result.fuel_remaining_liters,
            has_minimum_reserve: result.has_minimum_reserve,
        }
    }
}

/// Write the loadsheet report as pretty-printed JSON.
pub fn write_json(path: &Path, report: &LoadsheetReport<'_>) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// One CSV row per computed condition.
#[derive(Debug, Serialize)]
struct ConditionRecord<'a> {
    phase: &'a str,
    total_weight_kg: f64,
    cg_m: f64,
    within_envelope: bool,
    empty_moment: f64,
    fuel_moment: f64,
    station_moment_sum: f64,
}

impl<'a> ConditionRecord<'a> {
    fn from_condition(phase: &'a str, condition: &LoadCondition) -> Self {
        Self {
            phase,
            total_weight_kg: condition.total_weight_kg,
            cg_m: condition.cg_m,
            within_envelope: condition.within_envelope,
            empty_moment: condition.empty_moment,
            fuel_moment: condition.fuel_moment,
            station_moment_sum: condition.station_moments.values().sum(),
        }
    }
}

/// Write the takeoff and landing conditions as a two-row CSV table.
pub fn write_csv(path: &Path, result: &WeightBalanceResult) -> Result<(), ExportError> {
    let writer = writer_for_path(path)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.serialize(ConditionRecord::from_condition("takeoff", &result.takeoff))?;
    csv_writer.serialize(ConditionRecord::from_condition("landing", &result.landing))?;
    csv_writer.flush()?;
    Ok(())
}
