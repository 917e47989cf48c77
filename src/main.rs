//! Chartboard CLI: decode a tabular file and emit a chart payload as JSON.
//!
//! Stands in for the external upload and rendering collaborators: reads one
//! file, runs the ingestion pipeline, and prints the payload for the chosen
//! chart kind on stdout. Axis flags override the classifier's defaults.

use anyhow::{Context, Result};
use chartboard::data::{classify, decode_upload, transform};
use chartboard::types::{AxisSelection, ChartKind};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chartboard", about = "Tabular file to chart data", version)]
struct Cli {
    /// Input file (.csv, .tsv, .xlsx, .xls)
    file: PathBuf,

    /// Chart kind to produce
    #[arg(short, long, default_value = "bar")]
    chart: ChartArg,

    /// Category (label) column; defaults to the first categorical column
    #[arg(long)]
    category: Option<String>,

    /// Value (numeric) column; defaults to the first numeric column
    #[arg(long)]
    value: Option<String>,

    /// Print the inferred column schema instead of a payload
    #[arg(long)]
    schema: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum ChartArg {
    Line,
    Bar,
    Doughnut,
    Radar,
    Treemap,
    Gauge,
    Gantt,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Line => ChartKind::Line,
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Doughnut => ChartKind::Doughnut,
            ChartArg::Radar => ChartKind::Radar,
            ChartArg::Treemap => ChartKind::Treemap,
            ChartArg::Gauge => ChartKind::Gauge,
            ChartArg::Gantt => ChartKind::Gantt,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let filename = cli
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    let bytes = std::fs::read(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;

    let dataset = decode_upload(&filename, &bytes)
        .with_context(|| format!("decoding {}", filename))?;
    let schema = classify(&dataset);

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    let mut axes = schema.default_axes();
    if cli.category.is_some() || cli.value.is_some() {
        let category = cli.category.or(axes.category.take());
        let value = cli.value.or(axes.value.take());
        axes.set(category, value);
    }

    let payload = transform(&dataset, &axes, cli.chart.into());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
