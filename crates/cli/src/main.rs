use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use epi_report::assembler::ReportAssembler;
use epi_report::config::{ReportConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use epi_report::model::ChartImage;

/// Generates a COVID-19 PDF situation report for one target.
///
/// Fonts must be present under `assets/fonts` relative to the crate root or
/// provided via the `EPI_REPORT_FONTS_DIR` environment variable before
/// running the command.
#[derive(Parser)]
#[command(name = "epi-report", version, about = "COVID-19 PDF situation reports")]
struct Cli {
    /// Country code or name; "all" selects the global aggregate.
    #[arg(default_value = "all")]
    target: String,

    /// Chart image (PNG or JPEG) embedded into the report.
    #[arg(long)]
    chart: PathBuf,

    /// Directory the finished report is written into.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// JSON file holding annotations keyed by target identifier.
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Base URL of the statistics service.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Display timestamp shown under the report title; defaults to now.
    #[arg(long)]
    timestamp: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(path) => println!("{} has been saved.", path.display()),
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(err.as_ref());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf, Box<dyn Error>> {
    fs::create_dir_all(&cli.output_dir)?;

    let timestamp = cli
        .timestamp
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d %H:%M").to_string());

    let config = ReportConfig::default()
        .with_base_url(cli.base_url)
        .with_output_dir(cli.output_dir)
        .with_annotations_file(cli.annotations);

    let assembler = ReportAssembler::new(config);
    let path = assembler.assemble(&timestamp, &cli.target, ChartImage::from_path(cli.chart))?;
    Ok(path)
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
