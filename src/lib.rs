//! # lsbkit - LSB steganography for raw RGBA buffers
//!
//! lsbkit hides text in the least significant bits of an image and screens
//! images for payloads hidden the same way.
//!
//! ## Overview
//!
//! The library never decodes or encodes image files. Callers hand it a
//! decoded [`PixelBuffer`] (RGBA, row-major) and get buffers or structured
//! results back:
//!
//! - **Embed**: a 32-bit length header goes into the red LSB of the first 32
//!   pixels, the message follows at 3 bits per pixel (R, G, B LSBs).
//! - **Extract**: reads the header and exactly that many bytes back.
//! - **Analyze**: bit-plane slices, LSB entropy, suspicious 32×32 blocks, a
//!   disagreement heatmap and a best-effort guess at the hidden content.
//!
//! ## Example Usage
//!
//! ```rust
//! use lsbkit::{analyze, embed, extract_exact, PixelBuffer};
//!
//! let cover = PixelBuffer::filled(64, 64, [255, 255, 255, 255]);
//!
//! let stego = embed(&cover, "HELLO WORLD").unwrap();
//! assert_eq!(extract_exact(&stego).unwrap(), "HELLO WORLD");
//!
//! // A flat white image has no LSB entropy at all.
//! let report = analyze(&cover);
//! assert_eq!(report.statistics.lsb_entropy, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`buffer`]: the RGBA pixel buffer
//! - [`analysis`]: statistical screening (the detector)
//! - [`stego`]: embedding and header-driven extraction
//! - [`config`]: tunable thresholds, loadable from TOML

/// Number of header bits (one per pixel, red channel).
pub const HEADER_BITS: usize = 32;

/// Payload bits stored per pixel (R, G, B).
pub const BITS_PER_PIXEL: usize = 3;

/// Default ceiling on the byte count a header may announce.
pub const MAX_MESSAGE_LEN: u32 = 10_000;

/// Edge length of the square blocks scanned for local entropy.
pub const BLOCK_SIZE: u32 = 32;

pub mod analysis;
pub mod buffer;
pub mod config;
pub mod stego;

pub use analysis::{
    analyze, analyze_statistics, analyze_with_config, attempt_extraction, bit_plane, decompose,
    detect_suspicious_areas, render_heatmap, AnalysisResult, ExtractedData, ExtractedKind,
    StatisticalAnalysis, SuspiciousArea,
};
pub use buffer::{BufferError, PixelBuffer};
pub use config::{AnalyzerConfig, Config, ConfigError, StegoConfig};
pub use stego::{
    capacity_bytes, decode_latin1, embed, embed_bytes, embed_bytes_with_config, embed_with_config,
    embed_with_key, embed_with_key_and_config, encode_latin1, extract_exact, extract_exact_bytes,
    extract_exact_bytes_with_config, extract_exact_with_config, extract_exact_with_key,
    extract_exact_with_key_and_config, required_pixels, xor_cipher, DecodeError, EmbedError,
};
