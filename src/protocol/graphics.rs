//! # ESC/POS Raster Graphics
//!
//! This module implements the raster bit image command (`GS v 0`), which
//! transmits a monochrome bitmap of arbitrary height in one command.
//!
//! ## Bit Packing
//!
//! Graphics data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! Rows are padded up to a whole byte; padding bits must be 0. Packing pixels
//! into this layout is done by [`crate::render::raster`].

use super::commands::{GS, u16_le};

/// Length of the `GS v 0 m xL xH yL yH` header
pub const RASTER_HEADER_LEN: usize = 8;

/// Normal density mode (`m = 0`)
pub const RASTER_MODE_NORMAL: u8 = 0;

/// # Raster Header (GS v 0 m xL xH yL yH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS v 0 m xL xH yL yH d1...dk |
/// | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `m`: Mode, always 0 (normal density)
/// - `xL, xH`: Width in **bytes**, little-endian
/// - `yL, yH`: Height in dots, little-endian
/// - `d1...dk`: Image data, k = width_bytes × height bytes
///
/// ```text
/// width_bytes = xL + (xH × 256)
/// height_dots = yL + (yH × 256)
///
/// Example: 72 bytes wide = [0x48, 0x00]
/// Example: 500 rows high = [0xF4, 0x01]
/// ```
#[inline]
pub const fn raster_header(width_bytes: u16, height: u16) -> [u8; RASTER_HEADER_LEN] {
    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);
    [GS, b'v', b'0', RASTER_MODE_NORMAL, xl, xh, yl, yh]
}

/// # Print Raster Image (GS v 0)
///
/// Builds the header followed immediately by the packed data, as a single
/// buffer so the two can never be separated on the wire.
///
/// ## Example
///
/// ```
/// use escpos_thermal::protocol::graphics;
///
/// // 72 bytes wide (576 dots), 100 rows of vertical stripes
/// let data = vec![0xAA; 72 * 100];
/// let cmd = graphics::raster(72, 100, &data);
///
/// assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 72, 0, 100, 0]);
/// assert_eq!(cmd.len(), 8 + 72 * 100);
/// ```
pub fn raster(width_bytes: u16, height: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let mut cmd = Vec::with_capacity(RASTER_HEADER_LEN + data.len());
    cmd.extend_from_slice(&raster_header(width_bytes, height));
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let header = raster_header(72, 100);
        assert_eq!(header[0], 0x1D); // GS
        assert_eq!(header[1], 0x76); // 'v'
        assert_eq!(header[2], 0x30); // '0'
        assert_eq!(header[3], 0); // m = normal
        assert_eq!(header[4], 72); // xL
        assert_eq!(header[5], 0); // xH
        assert_eq!(header[6], 100); // yL
        assert_eq!(header[7], 0); // yH
    }

    #[test]
    fn test_raster_large_dimensions() {
        // 500 = 0x01F4, 300 = 0x012C
        let header = raster_header(300, 500);
        assert_eq!(&header[4..], &[0x2C, 0x01, 0xF4, 0x01]);
    }

    #[test]
    fn test_raster_max_dimensions() {
        let header = raster_header(u16::MAX, u16::MAX);
        assert_eq!(&header[4..], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_raster_preserves_data() {
        let data: Vec<u8> = (0..2 * 50).map(|i| (i % 256) as u8).collect();
        let cmd = raster(2, 50, &data);

        assert_eq!(&cmd[..RASTER_HEADER_LEN], &raster_header(2, 50));
        assert_eq!(&cmd[RASTER_HEADER_LEN..], &data[..]);
    }

    #[test]
    fn test_raster_empty_image() {
        let cmd = raster(0, 0, &[]);
        assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0x00, 0, 0, 0, 0]);
    }
}
