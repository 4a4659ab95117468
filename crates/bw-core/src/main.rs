//! BloomWatch CLI - NDVI bloom analytics over sample files.
//!
//! Reads a JSON array of NDVI samples and runs the analytics engine
//! over it: full reports, event detection, forecasts, statistics, and
//! pattern analysis. Payloads go to stdout; diagnostics to stderr.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

use bw_common::{Error, NdviSample, OutputFormat, Result};
use bw_config::{Thresholds, MONITORING_LOCATIONS};
use bw_core::logging::init_logging;
use bw_core::{
    analyze_patterns, analyze_series, calculate_stats_with, detect_bloom_events_with,
    predict_bloom_events_with,
};

/// BloomWatch - vegetation bloom detection and forecasting
#[derive(Parser)]
#[command(name = "bloomwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Threshold overrides file (TOML)
    #[arg(long, global = true, env = "BW_THRESHOLDS")]
    thresholds: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Path to a JSON array of NDVI samples
    #[arg(long, short = 'i')]
    input: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Full pass: statistics, events, forecast, and pattern analysis
    Analyze(InputArgs),

    /// Detect bloom events only
    Detect(InputArgs),

    /// Forecast the next bloom window
    Predict(InputArgs),

    /// Aggregate vegetation statistics
    Stats(InputArgs),

    /// Pattern analysis over the events detected in the series
    Patterns(InputArgs),

    /// List the monitoring-location reference table
    Locations,
}

fn load_samples(path: &Path) -> Result<Vec<NdviSample>> {
    let raw = std::fs::read_to_string(path)?;
    let samples: Vec<NdviSample> = serde_json::from_str(&raw)?;
    info!(count = samples.len(), path = %path.display(), "loaded samples");
    Ok(samples)
}

fn load_thresholds(global: &GlobalOpts) -> Result<Thresholds> {
    match &global.thresholds {
        Some(path) => Thresholds::load(path).map_err(|e| Error::Config {
            message: e.to_string(),
        }),
        None => Ok(Thresholds::default()),
    }
}

fn emit<T: serde::Serialize>(value: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("failed to serialize payload: {e}"),
        },
        OutputFormat::Text => print!("{}", text(value)),
    }
}

fn run(cli: Cli) -> Result<()> {
    let thresholds = load_thresholds(&cli.global)?;
    let format = cli.global.format;

    match cli.command {
        Commands::Analyze(args) => {
            let samples = load_samples(&args.input)?;
            let report = analyze_series(&samples, &thresholds);
            emit(&report, format, |r| r.render_text());
        }
        Commands::Detect(args) => {
            let samples = load_samples(&args.input)?;
            let events = detect_bloom_events_with(&samples, &thresholds.detector);
            emit(&events, format, |events| {
                if events.is_empty() {
                    "No bloom events detected\n".to_string()
                } else {
                    events
                        .iter()
                        .map(|e| {
                            format!(
                                "{}: {} intensity, {:.0}% confidence\n",
                                e.peak_date, e.intensity, e.confidence
                            )
                        })
                        .collect()
                }
            });
        }
        Commands::Predict(args) => {
            let samples = load_samples(&args.input)?;
            let predictions = predict_bloom_events_with(&samples, &thresholds);
            emit(&predictions, format, |predictions| {
                predictions
                    .iter()
                    .map(|p| {
                        format!(
                            "~{}: {} likelihood, {:.0}% confidence\n",
                            p.predicted_date, p.likelihood, p.confidence
                        )
                    })
                    .collect::<String>()
                    + if predictions.is_empty() {
                        "No forecast available\n"
                    } else {
                        ""
                    }
            });
        }
        Commands::Stats(args) => {
            let samples = load_samples(&args.input)?;
            let stats = calculate_stats_with(&samples, &thresholds.stats);
            emit(&stats, format, |s| {
                format!(
                    "avg {:.3}, min {:.3}, max {:.3}, trend {}, bloom probability {:.0}%\n",
                    s.avg_ndvi, s.min_ndvi, s.max_ndvi, s.trend, s.bloom_probability
                )
            });
        }
        Commands::Patterns(args) => {
            let samples = load_samples(&args.input)?;
            let events = detect_bloom_events_with(&samples, &thresholds.detector);
            let analysis = analyze_patterns(&events);
            emit(&analysis, format, |a| {
                let mut out = format!(
                    "{} intensity, {} frequency, {}\n",
                    a.average_intensity, a.bloom_frequency, a.seasonal_pattern
                );
                for insight in &a.insights {
                    out.push_str(&format!("  * {insight}\n"));
                }
                out
            });
        }
        Commands::Locations => {
            emit(&MONITORING_LOCATIONS, format, |locations| {
                locations
                    .iter()
                    .map(|l| {
                        format!(
                            "{} ({}, {}): {:.4}, {:.4}\n",
                            l.name, l.region, l.country, l.lat, l.lon
                        )
                    })
                    .collect()
            });
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose, cli.global.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), category = %e.category(), "{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
