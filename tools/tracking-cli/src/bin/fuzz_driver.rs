//! Replay one fuzz input outside a fuzzing engine
//!
//! Reads up to 1 MiB from the file named on the command line, or from stdin,
//! and runs it through the same entry point the libFuzzer targets use.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use tracking_cli::logging;
use tracking_record::{FpTrapConfig, run_driver};

/// Run a single input through the record decoder
#[derive(Parser)]
#[command(name = "tracking-fuzz-driver")]
#[command(about = "Replay a fuzz input through the record decoder")]
struct Args {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Do not install floating-point exception traps
    #[arg(long)]
    no_fp_traps: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init("warn");

    let traps = FpTrapConfig {
        enabled: !args.no_fp_traps,
    };

    let ret = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            run_driver(file, &traps)
        }
        None => run_driver(std::io::stdin().lock(), &traps),
    }
    .context("Failed to read input")?;

    tracing::info!(ret, "fuzz input processed");
    Ok(if ret == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
