use clap::Parser;
use isa_atmos_core::{
    AtmosphericState, ConverterError, HeightConverter, Hectopascals, Kelvin, Kilofeet, Kilometers,
    SearchSettings, StandardAtmosphere,
};
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Standard atmosphere altitude converter
#[derive(Parser, Debug)]
#[command(name = "isa-convert")]
#[command(about = "Convert between altitude, pressure and potential temperature in the ISA", long_about = None)]
struct Args {
    /// Altitude in kilometers
    #[arg(long, group = "input", allow_negative_numbers = true)]
    km: Option<f64>,

    /// Altitude in kilofeet
    #[arg(long, group = "input", allow_negative_numbers = true)]
    kft: Option<f64>,

    /// Pressure in hectopascals
    #[arg(long, group = "input", allow_negative_numbers = true)]
    hpa: Option<f64>,

    /// Potential temperature in Kelvin
    #[arg(long, group = "input", allow_negative_numbers = true)]
    theta: Option<f64>,

    /// Print a profile table from the ground to 47 km instead
    #[arg(short, long, conflicts_with = "input")]
    table: bool,

    /// Profile spacing in kilometers
    #[arg(long, default_value_t = 1.0, requires = "table")]
    step_km: f64,

    /// Emit JSON instead of text
    #[arg(short, long)]
    json: bool,

    /// Converge on the 0.05 Pa / 0.05 K absolute residual only
    #[arg(long)]
    absolute_only: bool,

    /// Cap on bisection halvings for the inverse lookups
    #[arg(long, default_value_t = SearchSettings::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

impl Args {
    fn search_settings(&self) -> SearchSettings {
        let base = if self.absolute_only {
            SearchSettings::absolute_only()
        } else {
            SearchSettings::default()
        };
        SearchSettings {
            max_iterations: self.max_iterations,
            ..base
        }
    }
}

/// One row of the profile table
#[derive(Serialize)]
struct ProfileRow {
    kilometers: Kilometers,
    kilofeet: Kilofeet,
    hectopascals: Hectopascals,
    temperature: Kelvin,
    potential_temperature: Kelvin,
    density: f64,
}

impl From<&AtmosphericState> for ProfileRow {
    fn from(state: &AtmosphericState) -> Self {
        Self {
            kilometers: state.kilometers(),
            kilofeet: state.kilofeet(),
            hectopascals: state.hectopascals(),
            temperature: state.temperature,
            potential_temperature: state.potential_temperature,
            density: *state.density,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn run_table(isa: &StandardAtmosphere, args: &Args) -> Result<(), String> {
    let levels = isa.evenly_spaced(Kilometers::new(args.step_km).to_meters());
    info!("Evaluating {} levels", levels.len());
    let profile = isa.profile(&levels).map_err(|e| e.to_string())?;
    let rows: Vec<ProfileRow> = profile.iter().map(ProfileRow::from).collect();

    if args.json {
        return print_json(&rows);
    }

    println!(
        "{:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "km", "kft", "hPa", "K", "θ", "kg/m³"
    );
    for row in &rows {
        println!(
            "{:10.4} {:10.4} {:10.4} {:10.4} {:10.4} {:10.6}",
            *row.kilometers,
            *row.kilofeet,
            *row.hectopascals,
            *row.temperature,
            *row.potential_temperature,
            row.density
        );
    }
    Ok(())
}

fn run_convert(isa: &StandardAtmosphere, args: &Args) -> Result<(), String> {
    let mut converter = HeightConverter::new(isa);

    let result: Result<_, ConverterError> = if let Some(km) = args.km {
        converter.set_kilometers(Kilometers::new(km))
    } else if let Some(kft) = args.kft {
        converter.set_kilofeet(Kilofeet::new(kft))
    } else if let Some(hpa) = args.hpa {
        converter.set_hectopascals(Hectopascals::new(hpa))
    } else if let Some(theta) = args.theta {
        converter.set_potential_temperature(Kelvin::new(theta))
    } else {
        Ok(converter.readout())
    };
    let readout = *result.map_err(|e| e.to_string())?;

    if args.json {
        print_json(&readout)
    } else {
        println!("{readout}");
        Ok(())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let isa = StandardAtmosphere::builder()
        .search(args.search_settings())
        .build();
    info!(
        "Model spans {} to {} ({} to {})",
        isa.altitude_limits().min,
        isa.altitude_limits().max,
        isa.ground().hectopascals(),
        isa.top().hectopascals()
    );

    let outcome = if args.table {
        run_table(&isa, &args)
    } else {
        run_convert(&isa, &args)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
