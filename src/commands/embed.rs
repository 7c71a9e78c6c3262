//! Embed command - hide a message in an image.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lsbkit::{capacity_bytes, embed_with_key_and_config};

use super::image_io::{load_buffer, load_config, save_png};
use super::CommandExecutor;

/// Hide a message in an image.
///
/// The output is always written as PNG. Lossy formats (JPEG) destroy the
/// hidden bits.
#[derive(Args, Debug)]
pub struct EmbedCommand {
    /// Cover image (PNG, BMP)
    #[arg(required = true)]
    pub image: PathBuf,

    /// Message to hide (Latin-1 characters only)
    #[arg(short, long)]
    pub message: String,

    /// Output path for the stego image
    #[arg(short, long)]
    pub output: PathBuf,

    /// XOR key applied before embedding
    /// WARNING: illustration only, this is NOT encryption
    #[arg(short, long)]
    pub key: Option<String>,

    /// TOML file with the message length ceiling
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for EmbedCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let cover = load_buffer(&self.image)?;

        let key = self.key.as_deref().unwrap_or_default();
        let stego =
            embed_with_key_and_config(&cover, &self.message, key.as_bytes(), &config.stego)?;
        save_png(&stego, &self.output)?;

        // Latin-1 stores one byte per character.
        println!(
            "Embedded {} bytes into {} (capacity {} bytes)",
            self.message.chars().count(),
            self.output.display(),
            capacity_bytes(&cover)
        );
        Ok(())
    }
}
