//! Catalog file loading. Accepts a YAML list of aircraft records, a single
//! TOML record, or a directory of TOML records (one aircraft per file).

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    AircraftCatalog, AircraftProfile, CatalogError, Envelope, FuelStation, Performance,
    SeatingLayout, Station,
};

/// On-disk aircraft record. Seating is expressed through optional passenger
/// stations and resolved into a [`SeatingLayout`] during conversion.
#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    /// Registration id the catalog is keyed by, e.g. `"C172S (SE-MIA)"`.
    pub id: String,
    pub type_name: String,
    pub basic_empty_weight_kg: f64,
    pub empty_weight_arm_m: f64,
    pub max_takeoff_weight_kg: f64,
    pub max_baggage_kg: f64,
    pub pilot_front: Station,
    #[serde(default)]
    pub passenger_rear: Option<Station>,
    #[serde(default)]
    pub passenger_back: Option<Station>,
    pub baggage: Station,
    pub fuel: FuelStation,
    pub envelope: Envelope,
    pub performance: Performance,
}

impl TryFrom<AircraftConfig> for AircraftProfile {
    type Error = CatalogError;

    fn try_from(config: AircraftConfig) -> Result<Self, Self::Error> {
        let seating = match (config.passenger_rear, config.passenger_back) {
            (Some(passenger_rear), None) => SeatingLayout::Standard { passenger_rear },
            (None, Some(passenger_back)) => SeatingLayout::Tandem { passenger_back },
            (Some(passenger_rear), Some(passenger_back)) => SeatingLayout::SixSeat {
                passenger_rear,
                passenger_back,
            },
            (None, None) => {
                return Err(CatalogError::Invalid {
                    aircraft: config.id,
                    reason: "at least one passenger station is required".to_string(),
                });
            }
        };

        let profile = AircraftProfile {
            type_name: config.type_name,
            basic_empty_weight_kg: config.basic_empty_weight_kg,
            empty_weight_arm_m: config.empty_weight_arm_m,
            max_takeoff_weight_kg: config.max_takeoff_weight_kg,
            max_baggage_kg: config.max_baggage_kg,
            pilot_front: config.pilot_front,
            baggage: config.baggage,
            seating,
            fuel: config.fuel,
            envelope: config.envelope,
            performance: config.performance,
        };
        profile.validate()?;
        Ok(profile)
    }
}

/// Load raw aircraft records from a YAML file, TOML file, or TOML directory.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, CatalogError> {
    load_records(path)
}

/// Load, convert, and validate a catalog from disk.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<AircraftCatalog, CatalogError> {
    let configs = load_records::<AircraftConfig, _>(path)?;
    let profiles = configs
        .into_iter()
        .map(|config| {
            let id = config.id.clone();
            AircraftProfile::try_from(config).map(|profile| (id, profile))
        })
        .collect::<Result<Vec<_>, _>>()?;
    AircraftCatalog::from_profiles(profiles)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
