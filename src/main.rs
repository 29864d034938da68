use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Convert a binary file into a text file with one hex byte per line.
///
/// Each byte of SOURCE becomes a line of two lowercase hex digits in
/// DESTINATION, in order. The output is meant for memory initialization.
#[derive(Debug, Parser)]
#[command(name = "bin2hex", version)]
struct Cli {
    /// Binary file to read
    source: PathBuf,

    /// Text file to write; created or truncated
    destination: PathBuf,

    /// Diagnostic log filter written to stderr (e.g. "debug", "bin2hex=info")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    bin2hex::convert_file(&cli.source, &cli.destination)?;
    Ok(())
}
