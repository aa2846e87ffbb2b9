//! Built-in club fleet, transcribed from the aircraft flight manuals and
//! current weighing reports. Masses in kilograms, arms in metres aft of the
//! reference datum.

use std::collections::BTreeMap;

use wb_core::units::SpeedUnit;

use crate::{
    AircraftProfile, CruisePerformance, Envelope, EnvelopePoint, FuelStation, Performance,
    PowerSetting, ReserveFuel, SeatingLayout, Station, TaxiFuel,
};

fn point(cg_m: f64, weight_kg: f64) -> EnvelopePoint {
    EnvelopePoint { cg_m, weight_kg }
}

fn cruise(
    power_setting: PowerSetting,
    liters_per_hour: f64,
    true_airspeed: f64,
    speed_unit: SpeedUnit,
) -> CruisePerformance {
    CruisePerformance {
        power_setting,
        liters_per_hour,
        true_airspeed,
        speed_unit,
    }
}

fn cessna_172s() -> AircraftProfile {
    AircraftProfile {
        type_name: "Cessna 172S".to_string(),
        basic_empty_weight_kg: 800.4,
        empty_weight_arm_m: 1.062,
        max_takeoff_weight_kg: 1155.0,
        max_baggage_kg: 54.0,
        pilot_front: Station {
            arm_m: 0.94,
            max_weight_kg: 340.0,
        },
        baggage: Station {
            arm_m: 2.41,
            max_weight_kg: 54.0,
        },
        seating: SeatingLayout::Standard {
            passenger_rear: Station {
                arm_m: 1.85,
                max_weight_kg: 340.0,
            },
        },
        fuel: FuelStation {
            arm_m: 1.17,
            max_liters: 200.0,
            standard_liters: 132.0,
            kg_per_liter: 0.72,
        },
        envelope: Envelope {
            boundary: vec![
                point(0.89, 800.0),
                point(0.89, 883.0),
                point(1.04, 1155.0),
                point(1.20, 1155.0),
                point(1.20, 800.0),
                point(0.89, 800.0),
            ],
            min_weight_kg: 750.0,
            max_weight_kg: 1155.0,
            forward_cg_m: 0.85,
            aft_cg_m: 1.25,
        },
        performance: Performance {
            cruise: vec![
                cruise(PowerSetting::Cruise55, 29.9, 102.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise65, 34.4, 111.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise75, 38.6, 116.0, SpeedUnit::Kias),
            ],
            taxi_fuel: TaxiFuel {
                liters: 4.2,
                time_minutes: 10.0,
            },
            reserve_fuel: ReserveFuel {
                minimum_minutes: 45.0,
                recommended_liters: 22.4,
            },
            speed_unit: SpeedUnit::Kias,
            stall_speed_clean: 48.0,
            stall_speed_landing: 40.0,
            best_climb_speed: 74.0,
            approach_speed_normal: 65.0,
            max_demo_crosswind_kt: 15.0,
        },
    }
}

fn diamond_da40d() -> AircraftProfile {
    AircraftProfile {
        type_name: "Diamond DA40 D".to_string(),
        basic_empty_weight_kg: 840.0,
        empty_weight_arm_m: 2.453,
        max_takeoff_weight_kg: 1150.0,
        max_baggage_kg: 30.0,
        pilot_front: Station {
            arm_m: 2.30,
            max_weight_kg: 340.0,
        },
        baggage: Station {
            arm_m: 3.65,
            max_weight_kg: 30.0,
        },
        seating: SeatingLayout::Standard {
            passenger_rear: Station {
                arm_m: 3.25,
                max_weight_kg: 340.0,
            },
        },
        fuel: FuelStation {
            arm_m: 2.63,
            max_liters: 148.0,
            standard_liters: 106.0,
            kg_per_liter: 0.8,
        },
        envelope: Envelope {
            boundary: vec![
                point(2.40, 840.0),
                point(2.40, 980.0),
                point(2.46, 1150.0),
                point(2.59, 1150.0),
                point(2.59, 840.0),
                point(2.40, 840.0),
            ],
            min_weight_kg: 800.0,
            max_weight_kg: 1150.0,
            forward_cg_m: 2.38,
            aft_cg_m: 2.60,
        },
        performance: Performance {
            cruise: vec![
                cruise(PowerSetting::Cruise55, 15.0, 106.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise65, 18.0, 116.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise75, 22.0, 122.0, SpeedUnit::Kias),
            ],
            taxi_fuel: TaxiFuel {
                liters: 4.0,
                time_minutes: 10.0,
            },
            reserve_fuel: ReserveFuel {
                minimum_minutes: 45.0,
                recommended_liters: 11.0,
            },
            speed_unit: SpeedUnit::Kias,
            stall_speed_clean: 52.0,
            stall_speed_landing: 49.0,
            best_climb_speed: 66.0,
            approach_speed_normal: 67.0,
            max_demo_crosswind_kt: 20.0,
        },
    }
}

fn diamond_da40ng() -> AircraftProfile {
    AircraftProfile {
        type_name: "Diamond DA40 NG".to_string(),
        basic_empty_weight_kg: 930.0,
        empty_weight_arm_m: 2.467,
        max_takeoff_weight_kg: 1280.0,
        max_baggage_kg: 45.0,
        pilot_front: Station {
            arm_m: 2.30,
            max_weight_kg: 340.0,
        },
        baggage: Station {
            arm_m: 3.89,
            max_weight_kg: 45.0,
        },
        seating: SeatingLayout::Standard {
            passenger_rear: Station {
                arm_m: 3.25,
                max_weight_kg: 340.0,
            },
        },
        fuel: FuelStation {
            arm_m: 2.63,
            max_liters: 148.0,
            standard_liters: 106.0,
            kg_per_liter: 0.8,
        },
        envelope: Envelope {
            boundary: vec![
                point(2.40, 940.0),
                point(2.40, 1080.0),
                point(2.46, 1280.0),
                point(2.53, 1280.0),
                point(2.53, 940.0),
                point(2.40, 940.0),
            ],
            min_weight_kg: 900.0,
            max_weight_kg: 1280.0,
            forward_cg_m: 2.38,
            aft_cg_m: 2.54,
        },
        performance: Performance {
            cruise: vec![
                cruise(PowerSetting::Cruise55, 15.0, 96.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise65, 19.0, 113.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise75, 25.0, 125.0, SpeedUnit::Kias),
            ],
            taxi_fuel: TaxiFuel {
                liters: 4.0,
                time_minutes: 10.0,
            },
            reserve_fuel: ReserveFuel {
                minimum_minutes: 45.0,
                recommended_liters: 11.0,
            },
            speed_unit: SpeedUnit::Kias,
            stall_speed_clean: 64.0,
            stall_speed_landing: 59.0,
            best_climb_speed: 72.0,
            approach_speed_normal: 77.0,
            max_demo_crosswind_kt: 25.0,
        },
    }
}

fn piper_pa28_161() -> AircraftProfile {
    AircraftProfile {
        type_name: "Piper PA-28-161".to_string(),
        basic_empty_weight_kg: 682.4,
        empty_weight_arm_m: 2.13,
        max_takeoff_weight_kg: 1055.0,
        max_baggage_kg: 23.0,
        pilot_front: Station {
            arm_m: 2.05,
            max_weight_kg: 340.0,
        },
        baggage: Station {
            arm_m: 3.63,
            max_weight_kg: 23.0,
        },
        seating: SeatingLayout::Standard {
            passenger_rear: Station {
                arm_m: 3.00,
                max_weight_kg: 340.0,
            },
        },
        fuel: FuelStation {
            arm_m: 2.41,
            max_liters: 182.0,
            standard_liters: 128.0,
            kg_per_liter: 0.72,
        },
        envelope: Envelope {
            boundary: vec![
                point(2.11, 750.0),
                point(2.11, 885.0),
                point(2.21, 1055.0),
                point(2.36, 1055.0),
                point(2.36, 750.0),
                point(2.11, 750.0),
            ],
            min_weight_kg: 700.0,
            max_weight_kg: 1055.0,
            forward_cg_m: 2.05,
            aft_cg_m: 2.40,
        },
        performance: Performance {
            cruise: vec![
                cruise(PowerSetting::Cruise55, 29.5, 91.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise65, 33.3, 99.0, SpeedUnit::Kias),
                cruise(PowerSetting::Cruise75, 37.9, 107.0, SpeedUnit::Kias),
            ],
            taxi_fuel: TaxiFuel {
                liters: 4.2,
                time_minutes: 10.0,
            },
            reserve_fuel: ReserveFuel {
                minimum_minutes: 45.0,
                recommended_liters: 22.1,
            },
            speed_unit: SpeedUnit::Kias,
            stall_speed_clean: 50.0,
            stall_speed_landing: 44.0,
            best_climb_speed: 79.0,
            approach_speed_normal: 63.0,
            max_demo_crosswind_kt: 17.0,
        },
    }
}

fn piper_pa18_150() -> AircraftProfile {
    AircraftProfile {
        type_name: "Piper PA-18-150 Super Cub".to_string(),
        basic_empty_weight_kg: 467.0,
        empty_weight_arm_m: 2.31,
        max_takeoff_weight_kg: 794.0,
        max_baggage_kg: 20.0,
        pilot_front: Station {
            arm_m: 2.16,
            max_weight_kg: 110.0,
        },
        baggage: Station {
            arm_m: 3.68,
            max_weight_kg: 20.0,
        },
        seating: SeatingLayout::Tandem {
            passenger_back: Station {
                arm_m: 3.12,
                max_weight_kg: 110.0,
            },
        },
        fuel: FuelStation {
            arm_m: 2.79,
            max_liters: 140.0,
            standard_liters: 88.0,
            kg_per_liter: 0.72,
        },
        envelope: Envelope {
            boundary: vec![
                point(2.08, 467.0),
                point(2.08, 680.0),
                point(2.39, 794.0),
                point(2.54, 794.0),
                point(2.54, 467.0),
                point(2.08, 467.0),
            ],
            min_weight_kg: 467.0,
            max_weight_kg: 794.0,
            forward_cg_m: 2.08,
            aft_cg_m: 2.54,
        },
        performance: Performance {
            cruise: vec![
                cruise(PowerSetting::Cruise55, 18.0, 98.0, SpeedUnit::Mph),
                cruise(PowerSetting::Cruise65, 22.0, 109.0, SpeedUnit::Mph),
                cruise(PowerSetting::Cruise75, 26.0, 117.0, SpeedUnit::Mph),
            ],
            taxi_fuel: TaxiFuel {
                liters: 3.0,
                time_minutes: 10.0,
            },
            reserve_fuel: ReserveFuel {
                minimum_minutes: 45.0,
                recommended_liters: 15.0,
            },
            speed_unit: SpeedUnit::Mph,
            stall_speed_clean: 50.0,
            stall_speed_landing: 45.0,
            best_climb_speed: 69.0,
            approach_speed_normal: 63.0,
            max_demo_crosswind_kt: 15.0,
        },
    }
}

/// All built-in profiles keyed by registration id.
pub fn profiles() -> BTreeMap<String, AircraftProfile> {
    let mut map = BTreeMap::new();
    map.insert("C172S (SE-MIA)".to_string(), cessna_172s());
    map.insert("DA40D (SE-MBC)".to_string(), diamond_da40d());
    map.insert("DA40NG (SE-MIO)".to_string(), diamond_da40ng());
    map.insert("PA28-161 (SE-KMI)".to_string(), piper_pa28_161());
    map.insert("PA18-150 (SE-GCG)".to_string(), piper_pa18_150());
    map
}
