// File: crates/heatmap-demo/src/main.rs
// Summary: Demo fetches the monthly variance dataset and renders it to PNG and SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use heatmap_core::{Dataset, HeatmapChart, RenderOptions};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Fixed data source for the monthly global land-surface temperature set.
const DATA_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Accept a local JSON path from the CLI or fall back to the fixed URL.
    let body = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading dataset from file");
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        None => fetch_dataset(DATA_URL).await?,
    };

    let dataset = Dataset::from_json(&body).context("parsing dataset")?;
    info!(
        records = dataset.monthly_variance.len(),
        heading = %dataset.heading(),
        "dataset loaded"
    );

    let chart = HeatmapChart::new(dataset);
    let opts = RenderOptions::default();

    let out_dir = PathBuf::from("target/out");
    let png_path = out_dir.join("heatmap.png");
    chart
        .render_to_png(&opts, &png_path)
        .context("rendering PNG")?;
    info!(path = %png_path.display(), "wrote PNG");

    let svg_path = png_path.with_extension("svg");
    chart
        .render_to_svg(&opts, &svg_path)
        .context("rendering SVG")?;
    info!(path = %svg_path.display(), "wrote SVG");

    Ok(())
}

/// One GET, no retries: a transport failure or a non-2xx status is fatal.
async fn fetch_dataset(url: &str) -> Result<String> {
    info!(url, "fetching dataset");
    let response = reqwest::get(url).await.context("requesting dataset")?;
    let response = response
        .error_for_status()
        .context("dataset request failed")?;
    response.text().await.context("reading dataset body")
}
