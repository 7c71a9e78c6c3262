//! Reads back a message written by [`embed`](super::embed).
//!
//! Extraction trusts the 32-bit header and nothing else. A header that
//! decodes to zero or to more than the configured ceiling means there is
//! no recognizable payload; that is reported as an error, not a panic.

use log::{debug, warn};
use thiserror::Error;

use super::decode_latin1;
use crate::buffer::{PixelBuffer, CHANNELS};
use crate::config::StegoConfig;
use crate::{BITS_PER_PIXEL, HEADER_BITS};

/// Errors that can occur while extracting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Invalid message length in header: {length}")]
    InvalidLength { length: u32 },

    #[error("Image too small for the announced message: need {required} pixels, have {available}")]
    Truncated { required: usize, available: usize },
}

/// Extracts the hidden message as text (Latin-1).
pub fn extract_exact(buf: &PixelBuffer) -> Result<String, DecodeError> {
    extract_exact_with_config(buf, &StegoConfig::default())
}

/// Like [`extract_exact`], with a custom length ceiling.
pub fn extract_exact_with_config(
    buf: &PixelBuffer,
    config: &StegoConfig,
) -> Result<String, DecodeError> {
    let bytes = extract_exact_bytes_with_config(buf, config)?;
    Ok(decode_latin1(&bytes))
}

/// Extracts the hidden message as raw bytes.
pub fn extract_exact_bytes(buf: &PixelBuffer) -> Result<Vec<u8>, DecodeError> {
    extract_exact_bytes_with_config(buf, &StegoConfig::default())
}

/// Extracts the hidden message as raw bytes, with a custom length ceiling.
pub fn extract_exact_bytes_with_config(
    buf: &PixelBuffer,
    config: &StegoConfig,
) -> Result<Vec<u8>, DecodeError> {
    let available = buf.pixel_count();
    if available < HEADER_BITS {
        return Err(DecodeError::Truncated {
            required: HEADER_BITS,
            available,
        });
    }

    let pixels = buf.pixels();
    let length = (0..HEADER_BITS).fold(0u32, |acc, i| {
        (acc << 1) | u32::from(pixels[i * CHANNELS] & 1)
    });

    if length == 0 || length > config.max_message_len {
        warn!("Header announces {} bytes, no recognizable payload", length);
        return Err(DecodeError::InvalidLength { length });
    }

    let bit_count = length as usize * 8;
    let required = HEADER_BITS + bit_count.div_ceil(BITS_PER_PIXEL);
    if required > available {
        return Err(DecodeError::Truncated {
            required,
            available,
        });
    }

    let mut data = vec![0u8; length as usize];
    for n in 0..bit_count {
        let pixel = HEADER_BITS + n / BITS_PER_PIXEL;
        let bit = pixels[pixel * CHANNELS + n % BITS_PER_PIXEL] & 1;
        data[n / 8] |= bit << (7 - n % 8);
    }

    debug!("Extracted {} bytes from {} pixels", length, required);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::embed::{embed, embed_bytes};

    /// Buffer whose header announces `length`, all other LSBs zero.
    fn with_header(width: u32, height: u32, length: u32) -> PixelBuffer {
        let mut raw = vec![0u8; (width * height) as usize * 4];
        for i in 0..32 {
            raw[i * 4] = ((length >> (31 - i)) & 1) as u8;
        }
        PixelBuffer::new(width, height, raw).unwrap()
    }

    #[test]
    fn test_hide_and_extract_small() {
        let image = PixelBuffer::filled(100, 100, [120, 33, 250, 255]);
        let hidden = embed(&image, "Hello, steganography!").unwrap();
        assert_eq!(extract_exact(&hidden).unwrap(), "Hello, steganography!");
    }

    #[test]
    fn test_hide_and_extract_binary() {
        let image = PixelBuffer::filled(200, 200, [1, 2, 3, 4]);
        let data: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();

        let hidden = embed_bytes(&image, &data).unwrap();
        assert_eq!(extract_exact_bytes(&hidden).unwrap(), data);
    }

    #[test]
    fn test_zero_length_header() {
        let image = PixelBuffer::filled(64, 64, [0, 0, 0, 255]);
        assert_eq!(
            extract_exact(&image),
            Err(DecodeError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn test_all_ones_header() {
        let image = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
        assert_eq!(
            extract_exact(&image),
            Err(DecodeError::InvalidLength { length: u32::MAX })
        );
    }

    #[test]
    fn test_header_ceiling() {
        let image = with_header(64, 64, 10_001);
        assert_eq!(
            extract_exact(&image),
            Err(DecodeError::InvalidLength { length: 10_001 })
        );

        let config = StegoConfig { max_message_len: 4 };
        let image = with_header(64, 64, 5);
        assert_eq!(
            extract_exact_with_config(&image, &config),
            Err(DecodeError::InvalidLength { length: 5 })
        );
    }

    #[test]
    fn test_body_larger_than_image() {
        // 10_000 bytes announced in a 64x64 image.
        let image = with_header(64, 64, 10_000);
        assert!(matches!(
            extract_exact(&image),
            Err(DecodeError::Truncated { available: 4096, .. })
        ));
    }

    #[test]
    fn test_tiny_image() {
        let image = PixelBuffer::filled(4, 4, [0, 0, 0, 0]);
        assert_eq!(
            extract_exact(&image),
            Err(DecodeError::Truncated {
                required: 32,
                available: 16
            })
        );
    }

    #[test]
    fn test_terminator_not_required() {
        // A header of 1 followed by 'Z' with no terminator after it.
        let mut image = with_header(12, 3, 1);
        let mut raw = image.clone().into_raw();
        for n in 0..8 {
            let offset = (32 + n / 3) * 4 + n % 3;
            raw[offset] |= (b'Z' >> (7 - n)) & 1;
        }
        image = PixelBuffer::new(12, 3, raw).unwrap();
        assert_eq!(extract_exact(&image).unwrap(), "Z");
    }
}
