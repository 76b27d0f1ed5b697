use catalyst_runner::{AnalysisPipeline, AnalysisRun, AnalysisSettings, RunnerResult};
use clap::Parser;
use std::path::PathBuf;

/// Correlate market events with detected price movements
#[derive(Debug, Parser)]
#[command(name = "catalyst", version, about)]
struct Cli {
    /// JSON settings document with `price` and `event` sections
    #[arg(long)]
    settings: PathBuf,

    /// JSON array of `{timestamp, value}` price points, sorted by timestamp
    #[arg(long)]
    prices: PathBuf,

    /// JSON array of market events
    #[arg(long)]
    events: PathBuf,

    /// Instrument label for the report
    #[arg(long, default_value = "UNKNOWN")]
    instrument: String,

    /// Order results by descending impact instead of input order
    #[arg(long)]
    ranked: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> RunnerResult<()> {
    let cli = Cli::parse();

    let settings = AnalysisSettings::from_file(&cli.settings)?;
    let run = AnalysisRun::from_files(cli.instrument, &cli.prices, &cli.events)?;

    let pipeline = AnalysisPipeline::new(settings)?;
    let mut report = pipeline.run(&run)?;
    if cli.ranked {
        report.results = report.ranked_results();
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}
