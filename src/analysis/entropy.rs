//! Global LSB statistics.
//!
//! All R, G and B least significant bits of the image are pooled into one
//! binary sample stream and its Shannon entropy measured. Natural images
//! keep some structure in their LSBs; an entropy suspiciously close to 1.0
//! is what LSB replacement with compressed or textual data tends to leave.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::config::AnalyzerConfig;

/// Number of bins in the coarse red histogram.
pub const HISTOGRAM_BINS: usize = 16;

/// Global statistics for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticalAnalysis {
    /// Base-2 entropy of the pooled R, G, B LSBs, in `[0, 1]`.
    pub lsb_entropy: f64,
    /// Red channel histogram (`R >> 4`), scaled so the largest bin is 1.0.
    pub color_histogram: [f64; HISTOGRAM_BINS],
    /// LSBs are close to perfectly random.
    pub unusual_patterns: bool,
    /// Heuristic likelihood that a message is present, in `[0, 1]`.
    pub message_probability: f64,
}

/// Counts of LSBs equal to 0 and to 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LsbCounts {
    pub zeros: u64,
    pub ones: u64,
}

impl LsbCounts {
    /// Adds the R, G, B LSBs of one pixel.
    pub fn add_pixel(&mut self, px: &[u8]) {
        for &channel in &px[..3] {
            if channel & 1 == 1 {
                self.ones += 1;
            } else {
                self.zeros += 1;
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.zeros + self.ones
    }

    /// Binary Shannon entropy of these counts (0 when empty).
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let p0 = self.zeros as f64 / total as f64;
        let p1 = self.ones as f64 / total as f64;
        term(p0) + term(p1)
    }
}

fn term(p: f64) -> f64 {
    if p > 0.0 {
        -p * p.log2()
    } else {
        0.0
    }
}

/// Computes entropy, histogram and the message-probability heuristic.
pub fn analyze_statistics(buf: &PixelBuffer, config: &AnalyzerConfig) -> StatisticalAnalysis {
    let mut counts = LsbCounts::default();
    let mut bins = [0u64; HISTOGRAM_BINS];

    for px in buf.chunks() {
        counts.add_pixel(px);
        bins[(px[0] >> 4) as usize] += 1;
    }

    let lsb_entropy = counts.entropy().clamp(0.0, 1.0);
    let color_histogram = normalize(&bins);

    let unusual_patterns = (lsb_entropy - 1.0).abs() < config.unusual_tolerance;

    let mut probability = 0.0;
    if unusual_patterns {
        probability += config.unusual_weight;
    }
    if lsb_entropy > config.near_random_low && lsb_entropy < config.near_random_high {
        probability += config.near_random_weight;
    }
    let message_probability = probability.clamp(0.0, 1.0);

    debug!(
        "LSB stats: zeros={} ones={} entropy={:.4} probability={:.2}",
        counts.zeros, counts.ones, lsb_entropy, message_probability
    );

    StatisticalAnalysis {
        lsb_entropy,
        color_histogram,
        unusual_patterns,
        message_probability,
    }
}

fn normalize(bins: &[u64; HISTOGRAM_BINS]) -> [f64; HISTOGRAM_BINS] {
    let max = bins.iter().copied().max().unwrap_or(0);
    let mut out = [0.0; HISTOGRAM_BINS];
    if max == 0 {
        return out;
    }
    for (slot, &count) in out.iter_mut().zip(bins.iter()) {
        *slot = count as f64 / max as f64;
    }
    out
}
