//! # ESC/POS Control Commands
//!
//! This module holds the opcode table shared by every encoder, plus the
//! paper-control commands (initialize, line feed, cut).
//!
//! ## Escape Sequence Structure
//!
//! Every command starts with one of two lead-in bytes:
//! - `ESC` (0x1B) for printer and text-mode commands
//! - `GS` (0x1D) for extended commands (character size, cutter, raster)
//!
//! followed by a command byte and its parameters. The only exception is the
//! bare `LF` byte, which prints the line buffer and advances one line.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Wire Summary
//!
//! ```text
//! Initialize:     1B 40
//! Underline:      1B 2D <m>
//! Bold:           1B 45 <m>
//! Justify:        1B 61 <m>
//! Character size: 1D 21 <m>
//! Line feed xn:   0A repeated n times
//! Cut:            1D 56 01
//! Raster image:   1D 76 30 00 <xL> <xH> <yL> <yH> <data...>
//! ```

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for character size, cutter and raster graphics commands.
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

/// Command byte of the cut opcode (`GS V`)
pub const CUT: u8 = b'V';

/// Cut mode parameter sent with `GS V`
///
/// Full and partial cut variants are not distinguished; printers that
/// support both treat 1 as a partial cut.
pub const CUT_MODE: u8 = 1;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets text formatting, character size and justification to the
/// power-on defaults. The printer's line buffer is cleared.
///
/// ## Example
///
/// ```
/// use escpos_thermal::protocol::commands;
///
/// assert_eq!(commands::init(), [0x1B, 0x40]);
/// ```
#[inline]
pub const fn init() -> [u8; 2] {
    [ESC, b'@']
}

// ============================================================================
// PAPER CONTROL
// ============================================================================

/// # Line Feed xn (LF ... LF)
///
/// Emits `n` bare `LF` bytes. `n = 0` yields an empty vector.
///
/// ## Example
///
/// ```
/// use escpos_thermal::protocol::commands;
///
/// assert_eq!(commands::line_feed(3), vec![0x0A, 0x0A, 0x0A]);
/// assert!(commands::line_feed(0).is_empty());
/// ```
#[inline]
pub fn line_feed(n: usize) -> Vec<u8> {
    vec![LF; n]
}

/// # Cut Paper (GS V 1)
///
/// Fires the cutter at the current position. Paper between the print head
/// and the blade is not fed first; callers compensate with line feeds (see
/// `PrinterConfig::cut_offset`).
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
#[inline]
pub const fn cut() -> [u8; 3] {
    [GS, CUT, CUT_MODE]
}

// ============================================================================
// HELPERS
// ============================================================================

/// Encode a u16 as little-endian bytes `[low, high]`.
///
/// ```
/// use escpos_thermal::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(ESC, 0x1B);
        assert_eq!(GS, 0x1D);
        assert_eq!(LF, b'\n');
    }

    #[test]
    fn test_init() {
        assert_eq!(init(), [0x1B, 0x40]);
    }

    #[test]
    fn test_line_feed_counts() {
        for n in [0usize, 1, 2, 7, 255, 1000] {
            let feeds = line_feed(n);
            assert_eq!(feeds.len(), n);
            assert!(feeds.iter().all(|&b| b == 0x0A));
        }
    }

    #[test]
    fn test_cut() {
        assert_eq!(cut(), [0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
    }
}
