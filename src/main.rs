//! lsbkit - LSB steganography from the command line.
//!
//! Decodes images with the `image` crate, hands raw RGBA buffers to the
//! library and writes results back as PNG (lossless, so the hidden bits
//! survive).

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::LevelFilter;

mod commands;

use commands::{AnalyzeCommand, CapacityCommand, CommandExecutor, EmbedCommand, ExtractCommand};

/// lsbkit - hide and find messages in image LSBs
#[derive(Parser)]
#[command(name = "lsbkit")]
#[command(version)]
#[command(about = "Embed, extract and detect LSB steganography in images")]
#[command(long_about = None)]
struct Cli {
    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen an image for hidden LSB data
    Analyze(AnalyzeCommand),

    /// Hide a message in an image (output is always PNG)
    Embed(EmbedCommand),

    /// Read back a message hidden with `embed`
    Extract(ExtractCommand),

    /// Show how many bytes an image can hold
    Capacity(CapacityCommand),
}

/// Logs go to stderr as `[LEVEL] message`, warnings only unless asked.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match &cli.command {
        Commands::Analyze(cmd) => cmd.execute(),
        Commands::Embed(cmd) => cmd.execute(),
        Commands::Extract(cmd) => cmd.execute(),
        Commands::Capacity(cmd) => cmd.execute(),
    }
}
