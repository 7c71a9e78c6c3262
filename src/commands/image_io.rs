//! File <-> PixelBuffer conversion and config loading for commands.

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use lsbkit::{Config, PixelBuffer};

/// Decodes an image file into an RGBA buffer.
pub fn load_buffer(path: &Path) -> Result<PixelBuffer> {
    let image = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let buffer = PixelBuffer::new(width, height, image.into_raw())?;
    Ok(buffer)
}

/// Writes a buffer as PNG, whatever the file extension says.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let image = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.pixels().to_vec())
        .context("Buffer size does not match its dimensions")?;
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Loads a config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            Config::load(p).with_context(|| format!("Failed to load config {}", p.display()))
        }
        None => Ok(Config::default()),
    }
}
