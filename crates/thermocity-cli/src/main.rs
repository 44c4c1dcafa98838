//! thermocity command-line scenario calculator
//!
//! Evaluates one emissions scenario and prints the category fluxes, the emissions
//! balance, the warming trajectory and the Paris classification.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p thermocity-cli -- \
//!   --preset baseline \
//!   --set energy=40 --set forest=300
//! ```

mod config;

use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;
use thermocity_components::session::{ScenarioSession, ScenarioView};
use thermocity_core::category::Category;
use thermocity_core::engine::ProjectionEngine;

use crate::config::CliConfig;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// Every slider at 100 %
    Baseline,
    /// Sources at 0 %, sinks at their maximum
    MaxGreen,
}

/// Climate scenario calculator
#[derive(Parser, Debug)]
#[command(name = "thermocity")]
#[command(about = "Project warming to 2100 from source and sink adjustments")]
struct Args {
    /// TOML file with [model] parameters and [sliders] limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting scenario before any --set is applied
    #[arg(short, long, value_enum, default_value_t = Preset::Baseline)]
    preset: Preset,

    /// Set a category percentage, e.g. `energy=50`. May be repeated
    #[arg(short = 's', long = "set", value_parser = parse_adjustment)]
    adjustments: Vec<(Category, f64)>,

    /// Print the scenario as JSON
    #[arg(long)]
    json: bool,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_adjustment(s: &str) -> Result<(Category, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=PERCENT, got '{}'", s))?;
    let category = key.parse::<Category>().map_err(|e| e.to_string())?;
    let percent = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid percentage '{}': {}", value, e))?;
    if !percent.is_finite() {
        return Err(format!("percentage for '{}' must be finite", key));
    }
    Ok((category, percent))
}

fn main() {
    let args = Args::parse();

    let _logger = match flexi_logger::Logger::try_with_str(&args.log_level)
        .and_then(|logger| logger.start())
    {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            std::process::exit(1);
        }
    };

    let config = match &args.config {
        Some(path) => match CliConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CliConfig::default(),
    };
    debug!("Using configuration {:?}", config);

    let mut session =
        ScenarioSession::new(ProjectionEngine::from_parameters(config.model), config.sliders);
    match args.preset {
        Preset::Baseline => session.reset(),
        Preset::MaxGreen => session.max_green(),
    };
    for (category, percent) in &args.adjustments {
        session.set_adjustment(*category, *percent);
    }

    let view = session.view();
    info!(
        "Scenario net={} classification={:?}",
        view.result.net_emissions, view.result.classification
    );

    if args.json {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialise scenario: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_view(&view);
    }
}

fn print_view(view: &ScenarioView) {
    println!("{:<26} {:>6} {:>10}", "Category", "%", "Flux");
    for readout in &view.readouts.categories {
        println!(
            "{:<26} {:>6} {:>10}",
            readout.label,
            view.adjustments.get(readout.category),
            readout.flux
        );
    }
    println!();
    println!("Gross emissions   {} Gt/yr", view.readouts.gross_emissions);
    println!("Total removal     {} Gt/yr", view.readouts.total_removal);
    println!("Net emissions     {} Gt/yr", view.readouts.net_emissions);
    println!();
    println!("{:<6} {:>8}", "Year", "°C");
    for point in &view.result.trajectory {
        println!("{:<6} {:>8.2}", point.year, point.temperature);
    }
    println!();
    println!(
        "Warming by horizon {} °C: {}",
        view.readouts.temperature_change, view.readouts.status
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adjustment() {
        assert_eq!(
            parse_adjustment("energy=50").unwrap(),
            (Category::Energy, 50.0)
        );
        assert_eq!(
            parse_adjustment("DAC= 250.5").unwrap(),
            (Category::Dac, 250.5)
        );
    }

    #[test]
    fn test_parse_adjustment_errors() {
        assert!(parse_adjustment("energy").is_err());
        assert!(parse_adjustment("coal=10").is_err());
        assert!(parse_adjustment("energy=lots").is_err());
        assert!(parse_adjustment("energy=NaN").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "thermocity",
            "--preset",
            "max-green",
            "--set",
            "energy=10",
            "-s",
            "ocean=200",
        ])
        .unwrap();
        assert!(matches!(args.preset, Preset::MaxGreen));
        assert_eq!(
            args.adjustments,
            vec![(Category::Energy, 10.0), (Category::Ocean, 200.0)]
        );
    }
}
