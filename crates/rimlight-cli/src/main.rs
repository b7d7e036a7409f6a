//! Rimlight CLI - Patch a technique file for a given display
//!
//! Loads a technique JSON file, rewrites the named render target's size and
//! scale factor, and emits the patched JSON for the renderer to pick up.

use anyhow::{Context, Result};
use clap::Parser;
use rimlight_technique::{DisplayMetrics, Technique};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rimlight")]
#[command(about = "Patch a rendering technique's target size and scale factor")]
#[command(version)]
struct Args {
    /// Path to the technique JSON file
    technique: PathBuf,

    /// Display width in points
    #[arg(long)]
    width: f64,

    /// Display height in points
    #[arg(long)]
    height: f64,

    /// Native scale factor (pixels per point)
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Render target to patch
    #[arg(long, default_value = "MASK")]
    target: String,

    /// Write the patched technique here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let mut technique = Technique::from_file(&args.technique)
        .with_context(|| format!("failed to load technique from {}", args.technique.display()))?;

    let metrics = DisplayMetrics::new(args.width, args.height, args.scale);
    if technique.apply_display_metrics(&args.target, &metrics) {
        info!(
            render_target = %args.target,
            size = %metrics.size_string(),
            scale = metrics.scale_factor,
            "technique patched"
        );
    } else {
        warn!(render_target = %args.target, "target not found, emitting technique unchanged");
    }

    let json = serde_json::to_string_pretty(technique.as_dict())?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "patched technique written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
