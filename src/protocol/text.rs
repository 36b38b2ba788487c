//! # ESC/POS Text Styling Commands
//!
//! Styling commands change how subsequent text bytes are printed. They are
//! modal: a style stays in effect until the same command is sent again with
//! a different parameter (or the printer is re-initialized).
//!
//! | Style | Command | Parameter |
//! |-------|---------|-----------|
//! | Underline | ESC - m | 0 off, 1 one-dot, 2 two-dot |
//! | Bold | ESC E m | 0 off, nonzero on |
//! | Justify | ESC a m | 0 left, 1 center, 2 right |
//! | Character size | GS ! m | width nibble << 4, height nibble |
//!
//! The `*_raw` builders pass the parameter byte through unchecked, which is
//! what deployed printers have always received. The typed builders restrict
//! the parameter to the documented values.

use super::commands::{ESC, GS};

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    Off = 0,
    OneDot = 1,
    TwoDot = 2,
}

/// # Underline Mode (ESC - m)
///
/// ```
/// use escpos_thermal::protocol::text::{self, Underline};
///
/// assert_eq!(text::underline(Underline::OneDot), [0x1B, 0x2D, 0x01]);
/// ```
#[inline]
pub const fn underline(mode: Underline) -> [u8; 3] {
    underline_raw(mode as u8)
}

/// Underline with an unvalidated parameter byte.
#[inline]
pub const fn underline_raw(m: u8) -> [u8; 3] {
    [ESC, b'-', m]
}

// ============================================================================
// BOLD
// ============================================================================

/// # Emphasized Mode (ESC E m)
///
/// Only the least significant bit is meaningful to the firmware, so any
/// nonzero raw value turns bold on.
#[inline]
pub const fn bold(on: bool) -> [u8; 3] {
    bold_raw(on as u8)
}

/// Bold with an unvalidated parameter byte.
#[inline]
pub const fn bold_raw(m: u8) -> [u8; 3] {
    [ESC, b'E', m]
}

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Line justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a m)
///
/// Applies to text and raster images alike; it must be sent at the start of
/// a line to take effect.
///
/// ```
/// use escpos_thermal::protocol::text::{self, Justify};
///
/// assert_eq!(text::justify(Justify::Center), [0x1B, 0x61, 0x01]);
/// ```
#[inline]
pub const fn justify(mode: Justify) -> [u8; 3] {
    justify_raw(mode as u8)
}

/// Justify with an unvalidated parameter byte.
#[inline]
pub const fn justify_raw(m: u8) -> [u8; 3] {
    [ESC, b'a', m]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Select Character Size (GS ! m)
///
/// `width` and `height` are magnifications minus one (0 = normal,
/// 1 = double, up to 7 on most printers). Each is truncated to its low
/// nibble, so out-of-range values wrap instead of failing:
///
/// ```text
/// m = (width & 0x0F) << 4 | (height & 0x0F)
/// ```
///
/// ```
/// use escpos_thermal::protocol::text;
///
/// assert_eq!(text::size(1, 1), [0x1D, 0x21, 0x11]);
/// assert_eq!(text::size(0, 0), [0x1D, 0x21, 0x00]);
/// ```
#[inline]
pub const fn size(width: u8, height: u8) -> [u8; 3] {
    [GS, b'!', ((width & 0x0F) << 4) | (height & 0x0F)]
}

// ============================================================================
// TESTS
// ============================================================================
