//! Block-level entropy scan.
//!
//! Re-runs the LSB entropy measure over fixed-size blocks so that a payload
//! confined to part of the image can be located. Edge blocks are clipped to
//! the image, not padded.

use log::debug;

use super::entropy::{LsbCounts, StatisticalAnalysis};
use crate::buffer::{PixelBuffer, CHANNELS};
use crate::config::AnalyzerConfig;

/// A block whose LSBs look random.
#[derive(Debug, Clone, PartialEq)]
pub struct SuspiciousArea {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// `1 - |1 - entropy|` of the block.
    pub confidence: f64,
}

/// Flags blocks whose local LSB entropy exceeds the configured threshold.
///
/// Returns nothing unless the global statistics already point at a
/// message. Results follow scan order (rows of blocks top to bottom, left
/// to right within a row) and are not merged.
pub fn detect_suspicious_areas(
    buf: &PixelBuffer,
    stats: &StatisticalAnalysis,
    config: &AnalyzerConfig,
) -> Vec<SuspiciousArea> {
    if stats.message_probability <= config.detection_threshold {
        return Vec::new();
    }

    let block = config.block_size.max(1);
    let (width, height) = (buf.width(), buf.height());
    let pixels = buf.pixels();
    let row_stride = width as usize * CHANNELS;
    let mut areas = Vec::new();

    for by in (0..height).step_by(block as usize) {
        let block_h = block.min(height - by);
        for bx in (0..width).step_by(block as usize) {
            let block_w = block.min(width - bx);

            let mut counts = LsbCounts::default();
            for y in by..by + block_h {
                let start = y as usize * row_stride + bx as usize * CHANNELS;
                let end = start + block_w as usize * CHANNELS;
                for px in pixels[start..end].chunks_exact(CHANNELS) {
                    counts.add_pixel(px);
                }
            }

            let entropy = counts.entropy();
            if entropy > config.block_entropy_threshold {
                areas.push(SuspiciousArea {
                    x: bx,
                    y: by,
                    width: block_w,
                    height: block_h,
                    confidence: 1.0 - (1.0 - entropy).abs(),
                });
            }
        }
    }

    debug!("Region scan: {} block(s) flagged", areas.len());
    areas
}
