//! # escpos-thermal - ESC/POS Thermal Printer Driver
//!
//! A driver for thermal receipt printers that speak ESC/POS over a raw byte
//! transport (TCP port 9100, a serial line, or a file). It provides:
//!
//! - **Protocol implementation**: ESC/POS command builders
//! - **Rasterizer**: threshold pixel data into packed 1-bit raster images
//! - **Buffered sink**: queue commands and deliver them on an explicit flush
//! - **Print session**: one façade tying the above to a transport
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::net::TcpStream;
//!
//! use escpos_thermal::{ImageOptions, PrintSession, PrinterConfig};
//! use escpos_thermal::protocol::text::Justify;
//! use escpos_thermal::render::LumaBuffer;
//!
//! let stream = TcpStream::connect("192.168.1.50:9100")?;
//! let mut session = PrintSession::new(stream, PrinterConfig::PAPER_80MM);
//!
//! session.justify(Justify::Center);
//! session.size(1, 1);
//! session.text("Hello\n");
//! session.size(0, 0);
//!
//! // 64x64 checkerboard
//! let logo = LumaBuffer::from_fn(64, 64, |x, y| if (x / 8 + y / 8) % 2 == 0 { 0 } else { 255 });
//! session.write_image(&logo, ImageOptions::default())?;
//! session.justify(Justify::Left);
//!
//! session.print_and_cut()?;
//! # Ok::<(), escpos_thermal::EscPosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`render`] | Pixel sources and raster packing |
//! | [`transport`] | Buffered command sink |
//! | [`printer`] | Configuration and print session |
//! | [`error`] | Error types |

pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::{EscPosError, Result};
pub use printer::{ImageOptions, PrintSession, PrinterConfig};
pub use transport::CommandSink;
