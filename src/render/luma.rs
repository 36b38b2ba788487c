//! # Pixel Sources
//!
//! The rasterizer reads pixels through [`LumaSource`], which only exposes
//! brightness: 0 is black, 255 is white. Color conversion happens before a
//! source reaches the rasterizer.
//!
//! Implementations are provided for:
//! - [`LumaBuffer`]: a plain row-major `Vec<u8>`
//! - [`image::GrayImage`]: 8-bit grayscale images from the `image` crate
//!
//! [`flatten_on_white`] converts any decoded image (including ones with an
//! alpha channel) to a `GrayImage`.

use image::{DynamicImage, GrayImage, ImageBuffer, Luma};

/// A rectangular grid of luma values.
pub trait LumaSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Brightness at `(x, y)`. Callers stay within `width() x height()`.
    fn luma(&self, x: u32, y: u32) -> u8;
}

impl<T: LumaSource + ?Sized> LumaSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        (**self).luma(x, y)
    }
}

impl LumaSource for GrayImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.get_pixel(x, y).0[0]
    }
}

// ============================================================================
// LUMA BUFFER
// ============================================================================

/// Row-major grayscale pixels, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LumaBuffer {
    /// Wrap existing pixels. Returns `None` unless
    /// `pixels.len() == width * height`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl LumaSource for LumaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn luma(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert a decoded image to grayscale, compositing transparency onto white.
///
/// Paper is white, so a fully transparent pixel must not print:
///
/// ```text
/// luma = (l * a + 255 * (255 - a)) / 255
/// ```
pub fn flatten_on_white(image: &DynamicImage) -> GrayImage {
    let la = image.to_luma_alpha8();
    GrayImage::from_fn(la.width(), la.height(), |x, y| {
        let [l, a] = la.get_pixel(x, y).0;
        let (l, a) = (l as u32, a as u32);
        Luma([((l * a + 255 * (255 - a)) / 255) as u8])
    })
}
