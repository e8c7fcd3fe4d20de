//! CLI entry point for bikeshare-stats.
//!
//! Runs the interactive session by default, or a single analysis when `--city` is given.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use bikeshare_stats::config::DataConfig;
use bikeshare_stats::ingestion::{LoadOptions, LogObserver};
use bikeshare_stats::pipeline;
use bikeshare_stats::prompt::run_session;
use bikeshare_stats::report::{write_report, OutputFormat};
use bikeshare_stats::selector::{City, DayFilter, MonthFilter, Selector};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bikeshare-stats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// JSON file mapping cities to CSV sources
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory containing the city CSV files (overrides the config's data_dir)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Analyze this city once instead of prompting
    #[arg(long)]
    city: Option<City>,

    /// Month filter for --city (January..June, or all)
    #[arg(long, default_value = "all", requires = "city")]
    month: MonthFilter,

    /// Weekday filter for --city (Monday..Sunday, or all)
    #[arg(long, default_value = "all", requires = "city")]
    day: DayFilter,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DataConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DataConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let options = LoadOptions {
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };

    match cli.city {
        Some(city) => {
            let selector = Selector::new(city, cli.month, cli.day);
            let report = pipeline::run(&config, &selector, &options)
                .with_context(|| format!("analyzing {city}"))?;
            let mut stdout = io::stdout().lock();
            write_report(&mut stdout, &report, cli.format)?;
            stdout.flush()?;
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout().lock();
            let mut errors = io::stderr();
            run_session(&config, &options, cli.format, &mut input, &mut output, &mut errors)?;
        }
    }

    Ok(())
}
