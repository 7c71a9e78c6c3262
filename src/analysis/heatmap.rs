//! Cross-channel LSB disagreement overlay.
//!
//! In untouched images the three channel LSBs of a pixel tend to agree
//! more often than chance; embedding breaks that. Each disagreeing pair
//! adds 0.5 to a pixel's score and the score becomes a translucent red.

use crate::buffer::PixelBuffer;

/// Maximum overlay opacity.
const MAX_ALPHA: f64 = 200.0;

/// Disagreement score for one pixel, in `[0, 1.5]`.
fn disagreement(px: &[u8]) -> f64 {
    let (r, g, b) = (px[0] & 1, px[1] & 1, px[2] & 1);
    let mut score = 0.0;
    if r != g {
        score += 0.5;
    }
    if r != b {
        score += 0.5;
    }
    if g != b {
        score += 0.5;
    }
    score
}

/// Maps a disagreement score to an overlay pixel, rounding to nearest.
///
/// With three channels the number of mismatched pairs is always 0 or 2, so
/// real pixels only ever score 0.0 or 1.0. Fractional scores are handled
/// anyway so the mapping stays correct on its own.
fn overlay(score: f64) -> [u8; 4] {
    let intensity = score * 255.0;
    let red = intensity.min(255.0).round() as u8;
    let alpha = intensity.min(MAX_ALPHA).round() as u8;
    [red, 0, 0, alpha]
}

/// Renders a red overlay the same size as `buf`.
pub fn render_heatmap(buf: &PixelBuffer) -> PixelBuffer {
    let mut out = Vec::with_capacity(buf.pixels().len());

    for px in buf.chunks() {
        out.extend_from_slice(&overlay(disagreement(px)));
    }

    PixelBuffer::from_parts(buf.width(), buf.height(), out)
}
