//! RGBA pixel buffer.
//!
//! Every component of the engine works on a [`PixelBuffer`]: 4 bytes per
//! pixel (R, G, B, A), row-major, top-to-bottom. Decoding files into this
//! shape is the caller's job.

use thiserror::Error;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Errors that can occur when building a pixel buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Malformed buffer: expected {expected} bytes for the given dimensions, got {actual}")]
    Malformed { expected: usize, actual: usize },

    #[error("Buffer too large: {width}x{height} pixels do not fit in memory")]
    TooLarge { width: u32, height: u32 },
}

/// An owned RGBA raster.
///
/// The byte length always equals `width * height * 4`; the only way to get
/// a buffer with arbitrary bytes is [`PixelBuffer::new`], which checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height).ok_or(BufferError::TooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(BufferError::Malformed {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wraps bytes the caller already sized for `width * height`.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(Some(pixels.len()), byte_len(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Creates a buffer where every pixel has the same RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`, like
    /// `Vec::with_capacity` does for an impossible allocation.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = allocation_len(width, height);
        let mut pixels = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Builds a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`PixelBuffer::filled`].
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut pixels = Vec::with_capacity(allocation_len(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the RGBA value of the pixel at a linear index.
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(CHANNELS)?;
        let px = self.pixels.get(start..start + CHANNELS)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns the RGBA value at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixel(y as usize * self.width as usize + x as usize)
    }

    /// Iterates over pixels as 4-byte slices.
    pub fn chunks(&self) -> std::slice::ChunksExact<'_, u8> {
        self.pixels.chunks_exact(CHANNELS)
    }

    /// Crate-internal mutable access; the length is never changed.
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consumes the buffer and returns its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

/// `width * height * 4`, or `None` when it overflows `usize`.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

fn allocation_len(width: u32, height: u32) -> usize {
    match byte_len(width, height) {
        Some(len) => len,
        None => panic!("{}x{} RGBA buffer overflows usize", width, height),
    }
}
