use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use plotters::prelude::*;
use weight_balance_calculator::catalog::{AircraftCatalog, PowerSetting, load_catalog};
use weight_balance_calculator::engine::{FlightLoadInput, FuelUnit, compute};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the certified weight/CG envelope, optionally with takeoff and landing markers"
)]
struct Cli {
    /// Aircraft registration id from the catalog
    #[arg(long)]
    aircraft: String,

    #[arg(long, default_value = "artifacts/envelope.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 1200)]
    width: u32,

    #[arg(long, default_value_t = 900)]
    height: u32,

    /// Catalog file or directory (defaults to the built-in fleet)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pilot and front passenger weight (kg); set together with --fuel to mark the load
    #[arg(long, default_value_t = 0.0)]
    pilot_front: f64,

    #[arg(long, default_value_t = 0.0)]
    passenger_rear: f64,

    #[arg(long, default_value_t = 0.0)]
    passenger_back: f64,

    #[arg(long, default_value_t = 0.0)]
    baggage: f64,

    /// Takeoff fuel in liters; when present the computed takeoff and landing
    /// points are drawn on the chart
    #[arg(long)]
    fuel: Option<f64>,

    #[arg(long, default_value_t = 60)]
    time: u32,

    #[arg(long, value_enum, default_value_t = PowerArg::P65)]
    power: PowerArg,
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
    let profile = catalog.get(&cli.aircraft)?;
    let envelope = &profile.envelope;

    let markers = match cli.fuel {
        Some(fuel_liters) => {
            let input = FlightLoadInput {
                pilot_front_kg: cli.pilot_front,
                passenger_rear_kg: cli.passenger_rear,
                passenger_back_kg: cli.passenger_back,
                baggage_kg: cli.baggage,
                fuel_amount: fuel_liters,
                fuel_unit: FuelUnit::Liters,
                flight_time_minutes: f64::from(cli.time),
                power_setting: cli.power.into(),
            };
            let result = compute(profile, &input)?;
            Some((
                (result.takeoff.cg_m, result.takeoff.total_weight_kg),
                (result.landing.cg_m, result.landing.total_weight_kg),
            ))
        }
        None => None,
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_margin = 0.1 * (envelope.aft_cg_m - envelope.forward_cg_m).max(0.05);
    let y_margin = 0.1 * (envelope.max_weight_kg - envelope.min_weight_kg).max(10.0);
    let x_range =
        (envelope.forward_cg_m - x_margin)..(envelope.aft_cg_m + x_margin);
    let y_range =
        (envelope.min_weight_kg - y_margin)..(envelope.max_weight_kg + y_margin);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} certified envelope", cli.aircraft),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc("CG aft of datum (m)")
        .y_desc("Weight (kg)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            envelope
                .boundary
                .iter()
                .map(|p| (p.cg_m, p.weight_kg)),
            BLUE.stroke_width(2),
        ))?
        .label("envelope")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], BLUE.stroke_width(2)));

    // Rectangular limits, the certified guard for boundary messaging.
    let rect = [
        (envelope.forward_cg_m, envelope.min_weight_kg),
        (envelope.forward_cg_m, envelope.max_weight_kg),
        (envelope.aft_cg_m, envelope.max_weight_kg),
        (envelope.aft_cg_m, envelope.min_weight_kg),
        (envelope.forward_cg_m, envelope.min_weight_kg),
    ];
    chart
        .draw_series(LineSeries::new(rect.iter().copied(), RED.mix(0.4)))?
        .label("limits")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], RED.mix(0.4)));

    if let Some((takeoff, landing)) = markers {
        chart.draw_series(LineSeries::new(
            [takeoff, landing].iter().copied(),
            BLACK.mix(0.5),
        ))?;
        chart
            .draw_series(std::iter::once(Circle::new(takeoff, 6, GREEN.filled())))?
            .label("takeoff")
            .legend(|(x, y)| Circle::new((x + 8, y), 5, GREEN.filled()));
        chart
            .draw_series(std::iter::once(TriangleMarker::new(landing, 7, RED.filled())))?
            .label("landing")
            .legend(|(x, y)| TriangleMarker::new((x + 8, y), 6, RED.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.85))
        .draw()?;
    root.present()?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
