//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for the ESC/POS command language spoken by
//! most thermal receipt printers. Builders are pure: they return the exact
//! bytes for one command and keep no state.
//!
//! ## Module Structure
//!
//! - [`commands`]: Opcode prefixes and paper control (init, feed, cut)
//! - [`text`]: Text styling (underline, bold, justify, character size)
//! - [`graphics`]: Raster bit image command
//! - [`unsupported`]: Surfaces with no encoder (QR, barcode, markdown)
//!
//! ## Usage Example
//!
//! ```
//! use escpos_thermal::protocol::{commands, graphics, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::justify(text::Justify::Center));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT\n");
//! data.extend(text::bold(false));
//!
//! // One 8-dot wide, 2-row image: a black square on the left half
//! data.extend(graphics::raster(1, 2, &[0xF0, 0xF0]));
//!
//! data.extend(commands::line_feed(3));
//! data.extend(commands::cut());
//! ```

pub mod commands;
pub mod graphics;
pub mod text;
pub mod unsupported;
