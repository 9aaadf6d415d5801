//! diwire - Entry Point
//!
//! ```text
//! diwire --snapshot snapshot.json [--config diwire.toml] [--output plan.json]
//!        [--pretty | --compact] [--summary]
//! ```
//!
//! The plan goes to stdout unless `--output` or `output.path` says otherwise;
//! logs and the summary go to stderr.

use clap::Parser;
use diwire::{RunOptions, bootstrap, run};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for diwire
#[derive(Parser, Debug)]
#[command(name = "diwire")]
#[command(about = "Compile annotated declarations into a dependency-injection plan")]
#[command(version)]
pub struct Cli {
    /// Semantic snapshot (JSON) exported by a front end
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the plan to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent the JSON plan
    #[arg(long, conflicts_with = "compact")]
    pub pretty: bool,

    /// Emit the JSON plan on a single line
    #[arg(long)]
    pub compact: bool,

    /// Print a summary of modules, bindings and diagnostics to stderr
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    fn options(&self) -> RunOptions {
        let pretty = match (self.pretty, self.compact) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        RunOptions {
            snapshot: self.snapshot.clone(),
            output: self.output.clone(),
            pretty,
            summary: self.summary,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("diwire: {err}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> diwire::Result<()> {
    let config = bootstrap(cli.config.as_deref())?;
    run(&cli.options(), &config).map(|_| ())
}
