//! Tintwork CLI - Command-line interface for color conversions

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "tintwork")]
#[command(about = "Tintwork: hex, RGB byte and normalized light color conversions", long_about = None)]
struct Cli {
    /// Print results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the Tintwork CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute(cli.json)?;

    Ok(())
}
