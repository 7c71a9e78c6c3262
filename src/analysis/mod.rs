//! Statistical screening for LSB payloads.
//!
//! [`analyze`] runs the stages in order:
//! 1. Bit-plane decomposition
//! 2. Global LSB entropy and histogram
//! 3. Block entropy scan, heatmap and heuristic extraction, only when the
//!    message probability from step 2 is above the detection threshold
//!
//! Screening never fails. "Nothing found" is a normal outcome and is
//! expressed through the probability and confidence scores.

pub mod bitplane;
pub mod entropy;
pub mod heatmap;
pub mod heuristic;
pub mod regions;

pub use bitplane::{bit_plane, decompose, PLANE_COUNT};
pub use entropy::{analyze_statistics, LsbCounts, StatisticalAnalysis, HISTOGRAM_BINS};
pub use heatmap::render_heatmap;
pub use heuristic::{attempt_extraction, ExtractedData, ExtractedKind};
pub use regions::{detect_suspicious_areas, SuspiciousArea};

use log::debug;

use crate::buffer::PixelBuffer;
use crate::config::AnalyzerConfig;

/// Everything the detector found for one image.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub statistics: StatisticalAnalysis,
    /// Bit planes, index 0 = LSB.
    pub bit_planes: Vec<PixelBuffer>,
    pub suspicious_areas: Vec<SuspiciousArea>,
    pub heatmap: Option<PixelBuffer>,
    pub extracted: Option<ExtractedData>,
}

impl AnalysisResult {
    /// Whether the later stages ran.
    pub fn is_suspicious(&self) -> bool {
        self.heatmap.is_some()
    }
}

/// Screens a buffer with the default thresholds.
pub fn analyze(buf: &PixelBuffer) -> AnalysisResult {
    analyze_with_config(buf, &AnalyzerConfig::default())
}

/// Screens a buffer with custom thresholds.
pub fn analyze_with_config(buf: &PixelBuffer, config: &AnalyzerConfig) -> AnalysisResult {
    let bit_planes = decompose(buf).into_iter().collect();
    let statistics = analyze_statistics(buf, config);

    let mut result = AnalysisResult {
        statistics,
        bit_planes,
        suspicious_areas: Vec::new(),
        heatmap: None,
        extracted: None,
    };

    if result.statistics.message_probability > config.detection_threshold {
        debug!(
            "Probability {:.2} above threshold {:.2}, running detailed stages",
            result.statistics.message_probability, config.detection_threshold
        );
        result.suspicious_areas = detect_suspicious_areas(buf, &result.statistics, config);
        result.heatmap = Some(render_heatmap(buf));
        result.extracted = Some(attempt_extraction(buf, config));
    }

    result
}
