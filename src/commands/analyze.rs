//! Analyze command - screen an image for LSB payloads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use lsbkit::{analyze_with_config, AnalysisResult, ExtractedKind};

use super::image_io::{load_buffer, load_config, save_png};
use super::CommandExecutor;

/// Screen an image for hidden LSB data.
///
/// Prints LSB entropy, the message-probability heuristic and, when the
/// probability is high enough, the flagged 32x32 blocks and a guess at the
/// hidden content. Detection is a statistical screen, not a proof.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Image to analyze (PNG, BMP)
    #[arg(required = true)]
    pub image: PathBuf,

    /// Write plane_0.png .. plane_7.png (and heatmap.png if rendered) here
    #[arg(long)]
    pub planes_dir: Option<PathBuf>,

    /// TOML file with detector thresholds
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;
        let buffer = load_buffer(&self.image)?;

        let result = analyze_with_config(&buffer, &config.analyzer);

        println!("Image: {} ({}x{})", self.image.display(), buffer.width(), buffer.height());
        println!();
        self.print_statistics(&result);
        self.print_areas(&result);
        self.print_extracted(&result);

        if let Some(dir) = &self.planes_dir {
            self.write_planes(dir, &result)?;
        }

        Ok(())
    }
}

impl AnalyzeCommand {
    fn print_statistics(&self, result: &AnalysisResult) {
        let stats = &result.statistics;
        println!("LSB entropy:         {:.4}", stats.lsb_entropy);
        println!("Unusual patterns:    {}", if stats.unusual_patterns { "yes" } else { "no" });
        println!("Message probability: {:.0}%", stats.message_probability * 100.0);

        let bars: String = stats
            .color_histogram
            .iter()
            .map(|&v| match (v * 4.0).round() as u8 {
                0 => ' ',
                1 => '.',
                2 => ':',
                3 => '|',
                _ => '#',
            })
            .collect();
        println!("Red histogram:       [{}]", bars);
    }

    fn print_areas(&self, result: &AnalysisResult) {
        if !result.is_suspicious() {
            println!();
            println!("Status: no strong LSB signal");
            return;
        }

        println!();
        println!("Suspicious areas: {}", result.suspicious_areas.len());
        for area in &result.suspicious_areas {
            println!(
                "  x={:<5} y={:<5} {}x{}  confidence {:.3}",
                area.x, area.y, area.width, area.height, area.confidence
            );
        }
    }

    fn print_extracted(&self, result: &AnalysisResult) {
        let Some(extracted) = &result.extracted else {
            return;
        };

        println!();
        let kind = match extracted.kind {
            ExtractedKind::Text => "text",
            ExtractedKind::Binary => "binary",
            ExtractedKind::Unknown => "unknown",
        };
        println!("Heuristic extraction ({}, {} bytes sampled):", kind, extracted.size_bytes);
        println!("  {}", extracted.data);
    }

    fn write_planes(&self, dir: &Path, result: &AnalysisResult) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for (bit, plane) in result.bit_planes.iter().enumerate() {
            save_png(plane, &dir.join(format!("plane_{}.png", bit)))?;
        }
        if let Some(heatmap) = &result.heatmap {
            save_png(heatmap, &dir.join("heatmap.png"))?;
        }

        println!();
        println!("Planes written to {}", dir.display());
        Ok(())
    }
}
