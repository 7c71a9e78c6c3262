//! Header-less payload guess.
//!
//! Used by the detector when nothing is known about how an image was
//! produced. It walks the raw byte array (not pixel indices) in steps of 4,
//! takes the LSBs of the three colour bytes at each step and checks whether
//! the result reads as printable ASCII.

use log::debug;

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::config::AnalyzerConfig;

/// What the recovered bits look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractedKind {
    Text,
    Binary,
    Unknown,
}

/// Best-effort content recovered from an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedData {
    pub kind: ExtractedKind,
    /// Printable text for `Text`, a '0'/'1' preview for `Binary`.
    pub data: String,
    /// Whole bytes' worth of bits collected.
    pub size_bytes: u32,
}

/// Reads LSBs from the start of the buffer and classifies them.
pub fn attempt_extraction(buf: &PixelBuffer, config: &AnalyzerConfig) -> ExtractedData {
    let pixels = buf.pixels();
    let window = pixels.len().min(config.heuristic_byte_window);

    let mut bits = Vec::with_capacity(window / CHANNELS * 3);
    let mut i = 0;
    while i < window {
        // Buffers are whole pixels, so i + 2 is always in range.
        bits.push(pixels[i] & 1);
        bits.push(pixels[i + 1] & 1);
        bits.push(pixels[i + 2] & 1);
        i += CHANNELS;
    }

    if bits.is_empty() {
        return ExtractedData {
            kind: ExtractedKind::Unknown,
            data: String::new(),
            size_bytes: 0,
        };
    }

    let text: String = bits
        .chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
        .filter(|b| (32..=126).contains(b))
        .map(char::from)
        .collect();

    let size_bytes = (bits.len() / 8) as u32;

    debug!(
        "Heuristic extraction: {} bits, {} printable chars",
        bits.len(),
        text.len()
    );

    if text.len() >= config.text_min_len {
        ExtractedData {
            kind: ExtractedKind::Text,
            data: text,
            size_bytes,
        }
    } else {
        let mut preview: String = bits
            .iter()
            .take(config.binary_preview_bits)
            .map(|&bit| if bit == 1 { '1' } else { '0' })
            .collect();
        preview.push_str("...");
        ExtractedData {
            kind: ExtractedKind::Binary,
            data: preview,
            size_bytes,
        }
    }
}
