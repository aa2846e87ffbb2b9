use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use weight_balance_calculator::catalog::{
    AircraftCatalog, AircraftProfile, PowerSetting, load_catalog,
};
use weight_balance_calculator::engine::{FlightLoadInput, FuelUnit, compute};
use weight_balance_calculator::export::{LoadsheetReport, write_csv, write_json};
use weight_balance_calculator::fuel::endurance_minutes;
use weight_balance_calculator::time::format_minutes;
use weight_balance_calculator::units::{SpeedUnit, kg_to_liters, liters_to_kg, speed_in_unit};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Compute a takeoff/landing weight and balance loadsheet"
)]
struct Cli {
    /// Aircraft registration id from the catalog, e.g. "C172S (SE-MIA)"
    #[arg(long)]
    aircraft: Option<String>,

    /// Pilot and front passenger weight (kg)
    #[arg(long, default_value_t = 0.0)]
    pilot_front: f64,

    /// Rear passenger weight (kg, standard and six-seat layouts)
    #[arg(long, default_value_t = 0.0)]
    passenger_rear: f64,

    /// Back/tandem passenger weight (kg, tandem and six-seat layouts)
    #[arg(long, default_value_t = 0.0)]
    passenger_back: f64,

    /// Baggage weight (kg)
    #[arg(long, default_value_t = 0.0)]
    baggage: f64,

    /// Fuel on board at takeoff
    #[arg(long, default_value_t = 0.0)]
    fuel: f64,

    /// Unit of the --fuel amount
    #[arg(long, value_enum, default_value_t = FuelUnitArg::Liters)]
    fuel_unit: FuelUnitArg,

    /// Quick fuel selection, overrides --fuel
    #[arg(long, value_enum)]
    tanks: Option<TankPreset>,

    /// Estimated flight time in minutes
    #[arg(long, default_value_t = 60)]
    time: u32,

    /// Cruise power setting
    #[arg(long, value_enum, default_value_t = PowerArg::P65)]
    power: PowerArg,

    /// Catalog file or directory (defaults to the built-in fleet)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the full loadsheet as JSON to this path ("-" for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the condition table as CSV to this path ("-" for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// List catalog aircraft and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FuelUnitArg {
    Liters,
    Kg,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum TankPreset {
    Standard,
    Full,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PowerArg {
    P55,
    P65,
    P75,
}

impl From<PowerArg> for PowerSetting {
    fn from(value: PowerArg) -> Self {
        match value {
            PowerArg::P55 => PowerSetting::Cruise55,
            PowerArg::P65 => PowerSetting::Cruise65,
            PowerArg::P75 => PowerSetting::Cruise75,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => AircraftCatalog::builtin(),
    };

    if cli.list {
        for id in catalog.identifiers() {
            println!("{id}");
        }
        return Ok(());
    }

    let id = cli
        .aircraft
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--aircraft is required (or use --list)"))?;
    let profile = catalog.get(id)?;

    let (fuel_amount, fuel_unit) = match cli.tanks {
        Some(TankPreset::Standard) => (profile.fuel.standard_liters, FuelUnit::Liters),
        Some(TankPreset::Full) => (profile.fuel.max_liters, FuelUnit::Liters),
        None => (
            cli.fuel,
            match cli.fuel_unit {
                FuelUnitArg::Liters => FuelUnit::Liters,
                FuelUnitArg::Kg => FuelUnit::Kg,
            },
        ),
    };

    let input = FlightLoadInput {
        pilot_front_kg: cli.pilot_front,
        passenger_rear_kg: cli.passenger_rear,
        passenger_back_kg: cli.passenger_back,
        baggage_kg: cli.baggage,
        fuel_amount,
        fuel_unit,
        flight_time_minutes: f64::from(cli.time),
        power_setting: cli.power.into(),
    };

    check_station_limits(profile, &input)?;

    let result = compute(profile, &input)?;

    let power: PowerSetting = cli.power.into();
    println!("=== Weight & Balance: {id} ({}) ===", profile.type_name);
    println!(
        "Flight time    : {} at {} power",
        format_minutes(cli.time),
        power
    );
    print_condition("Takeoff", &result.takeoff);
    print_condition("Landing (est.)", &result.landing);
    println!(
        "Fuel remaining : {:.1} L (recommended reserve {:.1} L) - {}",
        result.fuel_remaining_liters,
        profile.performance.reserve_fuel.recommended_liters,
        if result.has_minimum_reserve {
            "reserve OK"
        } else {
            "BELOW RESERVE"
        }
    );
    let takeoff_fuel_kg = match fuel_unit {
        FuelUnit::Kg => fuel_amount,
        FuelUnit::Liters => liters_to_kg(fuel_amount, profile.fuel.kg_per_liter),
    };
    let endurance = endurance_minutes(profile, takeoff_fuel_kg, power)?;
    println!(
        "Endurance      : {} at {} power",
        format_minutes(endurance.floor() as u32),
        power
    );
    print_aircraft_info(profile);

    if let Some(path) = &cli.json {
        let report = LoadsheetReport::new(id, profile, &input, &result);
        write_json(path, &report)?;
    }
    if let Some(path) = &cli.csv {
        write_csv(path, &result)?;
    }

    Ok(())
}

/// Per-station placard limits are the caller's responsibility, so the CLI
/// enforces them before handing the load to the engine.
fn check_station_limits(profile: &AircraftProfile, input: &FlightLoadInput) -> anyhow::Result<()> {
    let mut checks = vec![
        ("pilot/front", input.pilot_front_kg, profile.pilot_front.max_weight_kg),
        ("baggage", input.baggage_kg, profile.baggage.max_weight_kg),
    ];
    if let Some(station) = profile.passenger_rear() {
        checks.push(("rear passengers", input.passenger_rear_kg, station.max_weight_kg));
    } else if input.passenger_rear_kg > 0.0 {
        anyhow::bail!("this aircraft has no rear passenger station");
    }
    if let Some(station) = profile.passenger_back() {
        checks.push(("back passenger", input.passenger_back_kg, station.max_weight_kg));
    } else if input.passenger_back_kg > 0.0 {
        anyhow::bail!("this aircraft has no back passenger station");
    }
    for (name, weight, max) in checks {
        if weight > max {
            anyhow::bail!("{name} weight {weight:.1} kg exceeds station limit {max:.1} kg");
        }
    }

    let fuel_liters = match input.fuel_unit {
        FuelUnit::Liters => input.fuel_amount,
        FuelUnit::Kg => kg_to_liters(input.fuel_amount, profile.fuel.kg_per_liter),
    };
    if fuel_liters > profile.fuel.max_liters {
        anyhow::bail!(
            "fuel {:.1} L exceeds tank capacity {:.1} L",
            fuel_liters,
            profile.fuel.max_liters
        );
    }
    Ok(())
}

fn print_condition(label: &str, condition: &weight_balance_calculator::engine::LoadCondition) {
    println!(
        "{label:<15}: {:.1} kg, CG {:.3} m - {}",
        condition.total_weight_kg,
        condition.cg_m,
        if condition.within_envelope {
            "Within limits"
        } else {
            "EXCEEDS LIMITS"
        }
    );
}

fn print_aircraft_info(profile: &AircraftProfile) {
    let unit = profile.performance.speed_unit;
    let in_kias = |speed: f64| speed_in_unit(speed, unit, SpeedUnit::Kias);
    println!("--- Aircraft data ---");
    println!(
        "Empty weight   : {:.1} kg   MTOW: {:.0} kg   Max baggage: {:.0} kg",
        profile.basic_empty_weight_kg, profile.max_takeoff_weight_kg, profile.max_baggage_kg
    );
    println!(
        "Fuel           : max {:.0} L, standard {:.0} L ({:.2} kg/L)",
        profile.fuel.max_liters, profile.fuel.standard_liters, profile.fuel.kg_per_liter
    );
    println!(
        "Speeds (KIAS)  : stall {:.0}/{:.0}, climb {:.0}, approach {:.0}",
        in_kias(profile.performance.stall_speed_clean),
        in_kias(profile.performance.stall_speed_landing),
        in_kias(profile.performance.best_climb_speed),
        in_kias(profile.performance.approach_speed_normal),
    );
    println!(
        "Max demo x-wind: {:.0} kt",
        profile.performance.max_demo_crosswind_kt
    );
}
