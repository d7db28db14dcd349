mod error;
mod model;
mod pipeline;
mod report;
mod tracing;

use std::path::PathBuf;

use clap::Parser;

use crate::error::ReportError;
use crate::pipeline::stage1_generate::RngScoreSource;
use crate::pipeline::{DEFAULT_RESULTS_PATH, Reporter, RunConfig};

/// Print a text bar chart of placeholder evaluation scores and save them to a file.
#[derive(Parser, Debug)]
#[command(name = "evalplot", version, about, long_about = None)]
struct Cli {
    /// Results file; its directory must already exist
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    out: PathBuf,

    /// Seed for reproducible scores
    #[arg(long)]
    seed: Option<u64>,

    /// Also write a JSON summary to this path
    #[arg(long)]
    summary_json: Option<PathBuf>,

    /// More log output on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            results_path: self.out.clone(),
            seed: self.seed,
            summary_json: self.summary_json.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    crate::tracing::init(cli.verbose, cli.quiet);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ReportError> {
    let config = cli.run_config();
    let source = match config.seed {
        Some(seed) => RngScoreSource::seeded(seed),
        None => RngScoreSource::from_entropy(),
    };
    ::tracing::info!(
        results = %config.results_path.display(),
        seed = ?config.seed,
        "starting run"
    );

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    Reporter::new(config, source).run(&mut console)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
