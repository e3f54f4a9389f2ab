use std::io::Write;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Print a number and a greeting from a tiny class.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn init_logging() {
    // RUST_LOG wins, otherwise only warnings and errors
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("basics=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let _args = Args::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = basics::program::run(&mut out)?;
    out.flush()?;

    info!(lines = result.lines_written, "done");
    Ok(())
}
