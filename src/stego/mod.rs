//! LSB embedding and header-driven extraction.
//!
//! Layout written by [`embed`] and read by [`extract_exact`]:
//!
//! ```text
//! pixels 0..32   red LSB only   32-bit big-endian byte count
//! pixels 32..    R, G, B LSBs   message bytes MSB-first, then one 0x00 byte
//! ```
//!
//! Alpha is never touched. The trailing zero byte is written for
//! compatibility with existing stego images; extraction is driven by the
//! header alone and never reads it.

pub mod cipher;
pub mod embed;
pub mod extract;

pub use cipher::{
    embed_with_key, embed_with_key_and_config, extract_exact_with_key,
    extract_exact_with_key_and_config, xor_cipher,
};
pub use embed::{
    capacity_bytes, embed, embed_bytes, embed_bytes_with_config, embed_with_config,
    required_pixels, EmbedError,
};
pub use extract::{
    extract_exact, extract_exact_bytes, extract_exact_bytes_with_config,
    extract_exact_with_config, DecodeError,
};

/// Encodes text as Latin-1, one byte per character.
///
/// Returns the first character above U+00FF on failure.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, char> {
    text.chars().map(|c| u8::try_from(c).map_err(|_| c)).collect()
}

/// Decodes bytes as Latin-1; every byte maps to the code point of equal value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Bits of `bytes`, most significant first.
pub(crate) fn bits_msb_first(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
}
