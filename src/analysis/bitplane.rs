//! Bit-plane slicing.
//!
//! Plane `b` shows bit `b` of every R, G and B sample as full black or
//! white. Plane 0 (the LSB plane) is the one that matters for LSB payloads;
//! in a natural photo it still carries faint structure, while embedded data
//! looks like noise.

use crate::buffer::PixelBuffer;

/// Number of planes in an 8-bit channel.
pub const PLANE_COUNT: usize = 8;

/// Renders bit `bit` (0 = LSB, 7 = MSB) of each colour channel as 0 or 255.
///
/// Alpha is never decomposed; planes are always opaque. `bit` is taken
/// modulo 8.
pub fn bit_plane(buf: &PixelBuffer, bit: u8) -> PixelBuffer {
    let bit = bit & 7;
    let mut plane = Vec::with_capacity(buf.pixels().len());

    for px in buf.chunks() {
        for &channel in &px[..3] {
            plane.push(if (channel >> bit) & 1 == 1 { 255 } else { 0 });
        }
        plane.push(255);
    }

    PixelBuffer::from_parts(buf.width(), buf.height(), plane)
}

/// Slices a buffer into its eight bit planes, LSB first.
pub fn decompose(buf: &PixelBuffer) -> [PixelBuffer; PLANE_COUNT] {
    std::array::from_fn(|bit| bit_plane(buf, bit as u8))
}
