//! Capacity command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use lsbkit::{capacity_bytes, HEADER_BITS};

use super::image_io::{load_buffer, load_config};
use super::CommandExecutor;

/// Show how many bytes an image can hold.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Cover image (PNG, BMP)
    #[arg(required = true)]
    pub image: PathBuf,

    /// TOML file with the message length ceiling
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let buffer = load_buffer(&self.image)?;

        let capacity = capacity_bytes(&buffer);
        let usable = capacity.min(config.stego.max_message_len as usize);

        println!("Image: {} ({}x{})", self.image.display(), buffer.width(), buffer.height());
        println!("  Pixels:          {}", buffer.pixel_count());
        println!("  Header pixels:   {}", HEADER_BITS);
        println!("  Image capacity:  {} bytes", capacity);
        println!("  Usable (limit {}): {} bytes", config.stego.max_message_len, usable);
        Ok(())
    }
}
