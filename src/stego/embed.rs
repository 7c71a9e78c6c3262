//! Writes a length-prefixed message into a buffer's LSBs.

use log::{debug, warn};
use thiserror::Error;

use super::{bits_msb_first, encode_latin1};
use crate::buffer::{PixelBuffer, CHANNELS};
use crate::config::StegoConfig;
use crate::{BITS_PER_PIXEL, HEADER_BITS};

/// Errors that can occur while embedding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    #[error("Image too small to hide message: need {required} pixels, have {available}")]
    Capacity { required: usize, available: usize },

    #[error("Empty message")]
    EmptyMessage,

    #[error("Message too long: {length} bytes exceeds the {max} byte limit")]
    TooLong { length: usize, max: u32 },

    #[error("Character {ch:?} cannot be encoded as a single byte")]
    Unencodable { ch: char },
}

/// Pixels needed to carry an `n`-byte message, header and terminator included.
pub fn required_pixels(message_len: usize) -> usize {
    let payload_bits = message_len * 8 + 8;
    HEADER_BITS + payload_bits.div_ceil(BITS_PER_PIXEL)
}

/// Largest message, in bytes, that fits in this buffer.
pub fn capacity_bytes(buf: &PixelBuffer) -> usize {
    let payload_pixels = buf.pixel_count().saturating_sub(HEADER_BITS);
    // One byte of the payload area is reserved for the terminator.
    (payload_pixels * BITS_PER_PIXEL / 8).saturating_sub(1)
}

/// Hides `message` in a copy of `buf`.
///
/// The message is stored as Latin-1, so every accepted string comes back
/// unchanged from [`extract_exact`](super::extract_exact).
pub fn embed(buf: &PixelBuffer, message: &str) -> Result<PixelBuffer, EmbedError> {
    embed_with_config(buf, message, &StegoConfig::default())
}

/// Like [`embed`], with a custom message ceiling.
pub fn embed_with_config(
    buf: &PixelBuffer,
    message: &str,
    config: &StegoConfig,
) -> Result<PixelBuffer, EmbedError> {
    let bytes = encode_latin1(message).map_err(|ch| EmbedError::Unencodable { ch })?;
    embed_bytes_with_config(buf, &bytes, config)
}

/// Hides raw bytes in a copy of `buf`.
pub fn embed_bytes(buf: &PixelBuffer, data: &[u8]) -> Result<PixelBuffer, EmbedError> {
    embed_bytes_with_config(buf, data, &StegoConfig::default())
}

/// Hides raw bytes in a copy of `buf`, with a custom message ceiling.
///
/// All checks happen before anything is written: the result is either a
/// complete embedding or an error, never a truncated payload. The input
/// buffer is not modified in either case.
pub fn embed_bytes_with_config(
    buf: &PixelBuffer,
    data: &[u8],
    config: &StegoConfig,
) -> Result<PixelBuffer, EmbedError> {
    if data.is_empty() {
        return Err(EmbedError::EmptyMessage);
    }
    if data.len() > config.max_message_len as usize {
        return Err(EmbedError::TooLong {
            length: data.len(),
            max: config.max_message_len,
        });
    }

    let required = required_pixels(data.len());
    let available = buf.pixel_count();
    if required > available {
        warn!(
            "Refusing to embed {} bytes: need {} pixels, have {}",
            data.len(),
            required,
            available
        );
        return Err(EmbedError::Capacity {
            required,
            available,
        });
    }

    let mut output = buf.clone();
    let pixels = output.pixels_mut();

    let header = (data.len() as u32).to_be_bytes();
    for (i, bit) in bits_msb_first(&header).enumerate() {
        set_lsb(&mut pixels[i * CHANNELS], bit);
    }

    let mut written = 0;
    for (n, bit) in bits_msb_first(data).chain(bits_msb_first(&[0])).enumerate() {
        let pixel = HEADER_BITS + n / BITS_PER_PIXEL;
        set_lsb(&mut pixels[pixel * CHANNELS + n % BITS_PER_PIXEL], bit);
        written += 1;
    }

    debug!(
        "Embedded {} bytes ({} payload bits) into {} pixels",
        data.len(),
        written,
        required
    );

    Ok(output)
}

fn set_lsb(sample: &mut u8, bit: u8) {
    *sample = (*sample & 0xFE) | bit;
}
