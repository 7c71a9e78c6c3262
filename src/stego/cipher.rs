//! Repeating-key XOR layer.
//!
//! **Illustration only.** XOR with a repeating key gives no confidentiality
//! against anyone who looks: it leaks the key on known plaintext and has no
//! integrity check. Callers who need secrecy should encrypt with an
//! authenticated cipher before embedding and hand the ciphertext to
//! [`embed_bytes`](super::embed_bytes).

use super::embed::{embed_bytes_with_config, EmbedError};
use super::extract::{extract_exact_bytes_with_config, DecodeError};
use super::{decode_latin1, encode_latin1};
use crate::buffer::PixelBuffer;
use crate::config::StegoConfig;

/// XORs `data` in place with `key` repeated. An empty key leaves data as is.
pub fn xor_cipher(data: &mut [u8], key: &[u8]) {
    if key.is_empty() {
        return;
    }
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i % key.len()];
    }
}

/// XORs the message with `key`, then embeds it.
pub fn embed_with_key(
    buf: &PixelBuffer,
    message: &str,
    key: &[u8],
) -> Result<PixelBuffer, EmbedError> {
    embed_with_key_and_config(buf, message, key, &StegoConfig::default())
}

/// Like [`embed_with_key`], with a custom length ceiling.
///
/// An empty key embeds the message unchanged.
pub fn embed_with_key_and_config(
    buf: &PixelBuffer,
    message: &str,
    key: &[u8],
    config: &StegoConfig,
) -> Result<PixelBuffer, EmbedError> {
    let mut bytes = encode_latin1(message).map_err(|ch| EmbedError::Unencodable { ch })?;
    xor_cipher(&mut bytes, key);
    embed_bytes_with_config(buf, &bytes, config)
}

/// Extracts the payload and XORs it with `key`.
pub fn extract_exact_with_key(buf: &PixelBuffer, key: &[u8]) -> Result<String, DecodeError> {
    extract_exact_with_key_and_config(buf, key, &StegoConfig::default())
}

/// Like [`extract_exact_with_key`], with a custom length ceiling.
pub fn extract_exact_with_key_and_config(
    buf: &PixelBuffer,
    key: &[u8],
    config: &StegoConfig,
) -> Result<String, DecodeError> {
    let mut bytes = extract_exact_bytes_with_config(buf, config)?;
    xor_cipher(&mut bytes, key);
    Ok(decode_latin1(&bytes))
}
