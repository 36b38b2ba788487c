//! # Threshold Rasterizer
//!
//! Converts a [`LumaSource`] into the packed 1-bit layout used by the raster
//! command: each row is `ceil(width / 8)` bytes, bit 7 of each byte is the
//! leftmost of its 8 pixels, and a set bit prints ink.
//!
//! A pixel is ink when its luma is strictly below the threshold:
//!
//! ```text
//! threshold = 128
//!
//! luma:  0   64  127  128  200  255
//! ink:   ██  ██  ██   ░░   ░░   ░░
//! ```
//!
//! When the width is not a multiple of 8, the low bits of the last byte in
//! each row are padding. They are never set.

use log::trace;

use super::luma::LumaSource;
use crate::error::{EscPosError, Result};
use crate::protocol::graphics;

/// Check that a `width x height` pixel image fits the 16-bit raster header.
///
/// Returns `(width_bytes, height)` as they will be encoded, or
/// [`EscPosError::ImageTooLarge`]. Nothing is allocated.
pub fn header_dimensions(width: u32, height: u32) -> Result<(u16, u16)> {
    let width_bytes = width.div_ceil(8);
    let too_large = || EscPosError::ImageTooLarge {
        width_bytes,
        height,
    };
    let xb = u16::try_from(width_bytes).map_err(|_| too_large())?;
    let yb = u16::try_from(height).map_err(|_| too_large())?;
    Ok((xb, yb))
}

/// A packed monochrome bitmap, row-major, MSB-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBitmap {
    width: u32,
    height: u32,
    width_bytes: u32,
    data: Vec<u8>,
}

/// Threshold every pixel of `source` and pack the result.
///
/// Output depends only on the source pixels and the threshold.
pub fn rasterize<S: LumaSource + ?Sized>(source: &S, threshold: u8) -> RasterBitmap {
    let width = source.width();
    let height = source.height();
    let width_bytes = width.div_ceil(8);
    let stride = width_bytes as usize;

    let mut data = vec![0u8; stride * height as usize];

    for y in 0..height {
        let row = y as usize * stride;
        for x in 0..width {
            if source.luma(x, y) < threshold {
                data[row + x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    trace!(
        "rasterized {}x{} pixels into {} bytes (threshold {})",
        width,
        height,
        data.len(),
        threshold
    );

    RasterBitmap {
        width,
        height,
        width_bytes,
        data,
    }
}

impl RasterBitmap {
    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (rows)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, `ceil(width / 8)`
    pub fn width_bytes(&self) -> u32 {
        self.width_bytes
    }

    /// Packed rows
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Whether the pixel at `(x, y)` prints ink.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        let byte = self.data[y as usize * self.width_bytes as usize + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> u32 {
        self.data.iter().map(|b| b.count_ones()).sum()
    }

    /// Encode as a complete `GS v 0` command: header, then packed data.
    ///
    /// Fails with [`EscPosError::ImageTooLarge`] when the width in bytes or
    /// the height does not fit the 16-bit header fields.
    pub fn to_command(&self) -> Result<Vec<u8>> {
        let (width_bytes, height) = header_dimensions(self.width, self.height)?;
        Ok(graphics::raster(width_bytes, height, &self.data))
    }

    /// Render back to a black-and-white image, for previews.
    pub fn to_gray_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([if self.is_ink(x, y) { 0 } else { 255 }])
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
