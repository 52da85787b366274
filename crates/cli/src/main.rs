//! Branch predictor trace-replay CLI.
//!
//! This binary replays a branch trace through one predictor and reports accuracy:
//! 1. **Select:** Pick a predictor with a spec string (`--bp gshare:13`) or a JSON config file.
//! 2. **Replay:** Read `<hex pc> <0|1>` lines from a file or stdin (e.g. `bunzip2 -kc t.bz2 | bpsim`).
//! 3. **Report:** Print the three-line summary, or JSON with `--json`.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bpsim_core::config::PredictorConfig;
use bpsim_core::sim::{TraceReader, run};
use bpsim_core::stats::SimStats;

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Dynamic branch predictor simulator",
    long_about = "Replay a branch trace through a predictor and report the misprediction rate.\n\nPredictor specs:\n  static\n  gshare:<# ghistory>\n  tournament:<# ghistory>:<# lhistory>:<# index>\n  custom[:<# ghistory>[:<theta>]]\n\nExamples:\n  bpsim --bp gshare:13 traces/fp_1\n  bunzip2 -kc traces/int_1.bz2 | bpsim --bp tournament:9:10:10"
)]
struct Cli {
    /// Trace file to replay; reads stdin when omitted or `-`.
    trace: Option<PathBuf>,

    /// Predictor spec string; ignored when --config is given.
    #[arg(long = "bp", default_value = "static")]
    predictor: PredictorConfig,

    /// JSON predictor configuration file (overrides --bp).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Log engine setup and per-run summaries to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bpsim: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A `--config` file takes precedence over `--bp`.
fn select_config(cli: &Cli) -> Result<PredictorConfig, Box<dyn Error>> {
    match &cli.config {
        Some(path) => {
            let config = PredictorConfig::from_json(&fs::read_to_string(path)?)?;
            debug!(path = %path.display(), %config, "loaded predictor config");
            Ok(config)
        }
        None => Ok(cli.predictor),
    }
}

fn execute(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = select_config(cli)?;

    let stats = match cli.trace.as_deref() {
        Some(path) if path.as_os_str() != "-" => run(&config, TraceReader::open(path)?)?,
        _ => run(&config, TraceReader::stdin())?,
    };

    report(&config, &stats, cli.json)
}

fn report(config: &PredictorConfig, stats: &SimStats, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", stats.to_json()?);
    } else {
        println!("Predictor:       {config}");
        println!("{stats}");
    }
    Ok(())
}
