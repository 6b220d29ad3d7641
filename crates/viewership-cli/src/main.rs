// File: crates/viewership-cli/src/main.rs
// Summary: Loads a seasons CSV and renders the viewership bar chart to SVG, HTML and/or PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use viewership_core::{load_csv, Chart, ChartConfig, ValidationPolicy};

#[derive(Parser, Debug)]
#[command(name = "viewership-chart")]
#[command(about = "Render average viewership by season as a bar chart")]
#[command(version)]
struct Cli {
    /// CSV with Year, Episodes, Avg. Viewers (mil), Most watched episode, Viewers (mil), Data
    #[arg(default_value = "seasonsData.csv")]
    input: PathBuf,

    /// SVG output path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Standalone HTML page with hover tooltips
    #[arg(long)]
    html: Option<PathBuf>,

    /// PNG raster output path
    #[arg(long)]
    png: Option<PathBuf>,

    /// JSON file overriding layout, palette and labels
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fail on unparsable values instead of plotting them as NaN
    #[arg(long)]
    strict: bool,

    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };
    if cli.strict {
        config.policy = ValidationPolicy::Strict;
    }

    info!("Using input file: {}", cli.input.display());
    let dataset = load_csv(&cli.input)
        .with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    info!("Loaded {} seasons", dataset.len());
    if !dataset.warnings.is_empty() {
        warn!("{} value(s) could not be parsed", dataset.warnings.len());
    }

    let chart = Chart::from_dataset(dataset, config)?;
    let limits = chart.limits()?;
    info!(
        "Years [{}, {}], avg viewers [{:.2}, {:.2}] mil",
        limits.year_min, limits.year_max, limits.view_min, limits.view_max
    );

    let svg_out = match (&cli.svg, &cli.html, &cli.png) {
        (None, None, None) => Some(default_svg_path(&cli.input)),
        _ => cli.svg.clone(),
    };

    if let Some(path) = &svg_out {
        chart.render_to_svg(path)?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &cli.html {
        chart.render_to_html(path)?;
        info!("Wrote {}", path.display());
    }
    if let Some(path) = &cli.png {
        viewership_render_skia::render_to_png(&chart.scene()?, path)?;
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_target(false)
        .compact()
        .init();
}

/// target/out/<input stem>.svg
fn default_svg_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("{stem}.svg"))
}
