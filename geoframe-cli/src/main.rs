use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use geoframe::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Region checks and WGS-84 / GCJ-02 conversion
#[derive(Parser, Debug)]
#[clap(name = "geoframe", version, about)]
struct Cli {
    /// JSON configuration file (boundary preset, camera settings)
    #[clap(long, global = true, value_parser)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report whether a point is in region and which provider serves it
    #[clap(allow_negative_numbers = true)]
    Classify(Point),
    /// Convert a WGS-84 point to GCJ-02
    #[clap(allow_negative_numbers = true)]
    ToGcj(Point),
    /// Convert a GCJ-02 point to WGS-84
    #[clap(allow_negative_numbers = true)]
    ToWgs(Point),
    /// Print the provider for a point
    #[clap(allow_negative_numbers = true)]
    Provider(Point),
}

#[derive(Args, Debug)]
struct Point {
    /// Latitude in degrees
    #[clap(value_parser)]
    lat: f64,
    /// Longitude in degrees
    #[clap(value_parser)]
    lng: f64,
}

#[derive(Serialize)]
struct Classification {
    point: LatLng,
    in_region: bool,
    provider: MapProvider,
}

#[derive(Serialize)]
struct Conversion {
    from: CoordinateFrame,
    to: CoordinateFrame,
    input: LatLng,
    output: LatLng,
    shift_m: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            FrameConfig::from_path(path)
                .with_context(|| format!("failed to load {}", path.display()))?
                .resolve()
                .with_context(|| format!("invalid configuration in {}", path.display()))?
        }
        None => ResolvedFrameConfig::default(),
    };

    match &cli.command {
        Command::Classify(point) => {
            let point = parse_point(point)?;
            let selector = ProviderSelector::from_config(&config);
            let result = Classification {
                point,
                in_region: selector.is_in_region(&point),
                provider: selector.select(&point),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{:.6}, {:.6}: in region = {}, provider = {}",
                    point.lat, point.lng, result.in_region, result.provider
                );
            }
        }
        Command::ToGcj(point) => {
            let result = convert(&config, point, CoordinateFrame::Wgs84, CoordinateFrame::Gcj02)?;
            print_conversion(&result, cli.json)?;
        }
        Command::ToWgs(point) => {
            let result = convert(&config, point, CoordinateFrame::Gcj02, CoordinateFrame::Wgs84)?;
            print_conversion(&result, cli.json)?;
        }
        Command::Provider(point) => {
            let point = parse_point(point)?;
            let provider = ProviderSelector::from_config(&config).select(&point);
            if cli.json {
                println!("{}", serde_json::to_string(&provider)?);
            } else {
                println!("{}", provider);
            }
        }
    }

    Ok(())
}

fn parse_point(point: &Point) -> Result<LatLng> {
    LatLng::try_new(point.lat, point.lng).context("invalid point")
}

fn convert(
    config: &ResolvedFrameConfig,
    point: &Point,
    from: CoordinateFrame,
    to: CoordinateFrame,
) -> Result<Conversion> {
    let input = parse_point(point)?;
    let output = Converter::from_config(config).convert(input, from, to);
    Ok(Conversion {
        from,
        to,
        input,
        output,
        shift_m: input.distance_to(&output),
    })
}

fn print_conversion(result: &Conversion, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!(
            "{:.14}, {:.14} (shifted {:.1} m)",
            result.output.lat, result.output.lng, result.shift_m
        );
    }
    Ok(())
}
