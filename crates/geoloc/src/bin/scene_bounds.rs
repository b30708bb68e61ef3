//! Scene bounds tool
//!
//! Reads product metadata, sets up the geolocation context and prints the
//! scene's geographic bounding box and outer corners.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use geoloc::{GeoBounds, Geoloc, GeolocMetadata, SceneCorners};

/// Compute the geographic bounds of a scene
#[derive(Parser, Debug)]
#[command(name = "scene-bounds")]
#[command(about = "Compute the geographic bounding box of a raster scene")]
struct Args {
    /// Metadata JSON file describing the scene
    #[arg(short, long, env = "GEOLOC_METADATA")]
    metadata: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log level, used when RUST_LOG is unset or invalid
    #[arg(long, default_value = "warn", env = "GEOLOC_LOG_LEVEL")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Serialize)]
struct Report {
    projection: String,
    lines: usize,
    samples: usize,
    bounds: GeoBounds,
    corners: SceneCorners,
    flipped: bool,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let metadata = GeolocMetadata::from_path(&args.metadata)
        .with_context(|| format!("Failed to read metadata {}", args.metadata.display()))?;
    let def = metadata
        .space_def()
        .context("Failed to build space definition")?;

    info!(projection = %def.projection, lines = def.lines, samples = def.samples, "setting up geolocation");

    let geoloc = Geoloc::setup(&def).context("Failed to set up geolocation")?;
    let bounds = geoloc
        .compute_bounds(def.lines, def.samples)
        .context("Failed to compute bounding box")?;
    let corners = geoloc
        .corners(def.lines, def.samples)
        .context("Failed to map scene corners")?;

    let report = Report {
        projection: def.projection.to_string(),
        lines: def.lines,
        samples: def.samples,
        bounds,
        corners,
        flipped: corners.is_flipped(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    Ok(())
}

fn print_text(report: &Report) {
    println!(
        "{} scene, {} lines x {} samples",
        report.projection, report.lines, report.samples
    );
    println!("West bound:  {:.6}", report.bounds.min_lon);
    println!("East bound:  {:.6}", report.bounds.max_lon);
    println!("North bound: {:.6}", report.bounds.max_lat);
    println!("South bound: {:.6}", report.bounds.min_lat);
    for (name, (lon, lat)) in [
        ("UL", report.corners.ul),
        ("UR", report.corners.ur),
        ("LL", report.corners.ll),
        ("LR", report.corners.lr),
    ] {
        println!("{} corner:   {:.6} {:.6}", name, lon, lat);
    }
    if report.flipped {
        println!("Scene is stored south-up");
    }
}
