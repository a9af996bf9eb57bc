//! # retail-bi
//!
//! Command-line interface for the retail BI pipeline: reads a sales CSV,
//! runs normalization, aggregation, forecasting and anomaly detection, and
//! writes the star-schema exports plus a text summary.

mod input;
mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use input::{load_config, load_table, Overrides};
use pipeline_facade::{PipelineConfig, RetailPipeline};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "retail-bi")]
#[command(about = "Retail sales BI pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over a sales CSV
    Run {
        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the exported files
        #[arg(short, long, default_value = "outputs")]
        output_dir: PathBuf,

        /// JSON configuration file (optional)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Months to forecast
        #[arg(long)]
        horizon: Option<usize>,

        /// Confidence level of the forecast bands, in (0, 1)
        #[arg(long)]
        confidence: Option<f64>,

        /// Anomaly z-score threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Minimum months of history for forecasting and anomaly detection
        #[arg(long)]
        min_history: Option<usize>,

        /// Reject rows with negative quantity instead of keeping them as returns
        #[arg(long)]
        exclude_returns: bool,
    },

    /// Print the default configuration as JSON
    Config,
}

/// Run the pipeline and write every export. Returns the summary text.
fn run_pipeline(
    input: &Path,
    output_dir: &Path,
    config: Option<&Path>,
    overrides: &Overrides,
) -> CliResult<String> {
    let config = overrides.apply(load_config(config)?);
    let pipeline = RetailPipeline::new(config).map_err(|e| e.to_string())?;

    let table = load_table(input)?;
    info!(rows = table.row_count(), input = ?input, "loaded input");

    let report = pipeline.run(&table).map_err(|e| e.to_string())?;
    let written = output::write_outputs(output_dir, &report)?;
    info!(files = written.len(), dir = ?output_dir, "exports written");

    Ok(report.summary().to_string())
}

fn print_default_config() -> CliResult<()> {
    let json = serde_json::to_string_pretty(&PipelineConfig::default())
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "retail_bi=info,pipeline_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output_dir,
            config,
            horizon,
            confidence,
            threshold,
            min_history,
            exclude_returns,
        } => {
            let overrides = Overrides {
                horizon,
                confidence,
                threshold,
                min_history,
                exclude_returns,
            };
            run_pipeline(&input, &output_dir, config.as_deref(), &overrides).map(|summary| {
                print!("{}", summary);
                println!("\nOutputs written to {:?}", output_dir);
            })
        }

        Commands::Config => print_default_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
