//! Extract command - read back an embedded message.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lsbkit::extract_exact_with_key_and_config;

use super::image_io::{load_buffer, load_config};
use super::CommandExecutor;

/// Read back a message hidden with `embed`.
///
/// Fails when the length header does not describe a plausible message.
#[derive(Args, Debug)]
pub struct ExtractCommand {
    /// Stego image
    #[arg(required = true)]
    pub image: PathBuf,

    /// XOR key used when embedding
    #[arg(short, long)]
    pub key: Option<String>,

    /// TOML file with the message length ceiling
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for ExtractCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let buffer = load_buffer(&self.image)?;

        let key = self.key.as_deref().unwrap_or_default();
        let message = extract_exact_with_key_and_config(&buffer, key.as_bytes(), &config.stego)?;

        println!("{}", message);
        Ok(())
    }
}
