//! # Rendering Module
//!
//! Turns pixel data into the packed monochrome bitmaps the raster command
//! expects.
//!
//! ## Modules
//!
//! - [`luma`]: Pixel sources exposing per-pixel brightness
//! - [`raster`]: Threshold and pack pixels, MSB-first, into rows of bytes
//!
//! ## Usage Example
//!
//! ```
//! use escpos_thermal::render::{luma::LumaBuffer, raster};
//!
//! // 16x2 gradient, dark on the left
//! let source = LumaBuffer::from_fn(16, 2, |x, _y| (x * 16) as u8);
//! let bitmap = raster::rasterize(&source, 128);
//!
//! assert_eq!(bitmap.width_bytes(), 2);
//! assert_eq!(bitmap.data(), &[0xFF, 0x00, 0xFF, 0x00]);
//! ```

pub mod luma;
pub mod raster;

pub use luma::{LumaBuffer, LumaSource};
pub use raster::{RasterBitmap, header_dimensions, rasterize};
