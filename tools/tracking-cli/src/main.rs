use anyhow::Result;

use tracking_cli::{Invocation, config, logging, resolve, usage};

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "tracking".to_string())
}

fn main() -> Result<()> {
    let (cli, mode) = match resolve(std::env::args_os()) {
        Invocation::Run { cli, mode } => (cli, mode),
        Invocation::Usage => {
            println!("{}", usage(&program_name()));
            return Ok(());
        }
        Invocation::Clap(e) => e.exit(),
    };

    let loaded = config::load(cli.config.as_deref())?;
    logging::init(&loaded.config.log.filter);
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let traps = loaded.config.fp_traps(cli.no_fp_traps);
    tracing::debug!(status = ?traps.install(), "floating-point trap setup");

    tracing::debug!(?mode, "running");
    tracking_cli::run(mode, std::io::stdout().lock())
}
