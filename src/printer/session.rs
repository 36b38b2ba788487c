//! # Print Session
//!
//! [`PrintSession`] is the entry point for a print job. It owns one
//! [`CommandSink`] and one [`PrinterConfig`] for the lifetime of a transport
//! connection. Every encode method queues bytes; only [`PrintSession::flush`]
//! and [`PrintSession::print_and_cut`] perform I/O.
//!
//! ## Example
//!
//! ```
//! use escpos_thermal::{PrintSession, PrinterConfig};
//! use escpos_thermal::protocol::text::Justify;
//!
//! let mut session = PrintSession::new(Vec::new(), PrinterConfig::default().with_cut_offset(2));
//!
//! session.justify(Justify::Center);
//! session.bold(true);
//! session.text("RECEIPT\n");
//! session.bold(false);
//! session.print_and_cut()?;
//!
//! let sent = session.into_inner();
//! assert!(sent.ends_with(&[0x0A, 0x0A, 0x1D, 0x56, 0x01]));
//! # Ok::<(), escpos_thermal::EscPosError>(())
//! ```
//!
//! A session serves one thread at a time. Share it behind a mutex, or open
//! one session per connection.

use std::io::Write;

use log::debug;

use super::config::{ImageOptions, PrinterConfig};
use crate::error::{EscPosError, Result};
use crate::protocol::text::{Justify, Underline};
use crate::protocol::unsupported::Feature;
use crate::protocol::{commands, text};
use crate::render::luma::LumaSource;
use crate::render::raster;
use crate::transport::CommandSink;

/// A print job bound to one transport.
#[derive(Debug)]
pub struct PrintSession<W: Write> {
    sink: CommandSink<W>,
    config: PrinterConfig,
}

impl<W: Write> PrintSession<W> {
    pub fn new(transport: W, config: PrinterConfig) -> Self {
        Self {
            sink: CommandSink::new(transport),
            config,
        }
    }

    /// Session with no cut offset and no image width limit.
    pub fn with_defaults(transport: W) -> Self {
        Self::new(transport, PrinterConfig::default())
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Raw output
    // ------------------------------------------------------------------------

    /// Queue raw bytes, typically printable text.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.sink.enqueue(data)
    }

    /// Queue a string as-is. No code page translation is applied.
    pub fn text(&mut self, s: &str) -> usize {
        self.write(s.as_bytes())
    }

    /// Reset the printer's modes (`ESC @`).
    pub fn initialize(&mut self) -> usize {
        self.sink.enqueue(&commands::init())
    }

    // ------------------------------------------------------------------------
    // Styling
    // ------------------------------------------------------------------------

    pub fn underline(&mut self, mode: Underline) -> usize {
        self.sink.enqueue(&text::underline(mode))
    }

    pub fn bold(&mut self, on: bool) -> usize {
        self.sink.enqueue(&text::bold(on))
    }

    pub fn justify(&mut self, mode: Justify) -> usize {
        self.sink.enqueue(&text::justify(mode))
    }

    /// Character magnification minus one; each value keeps its low nibble.
    pub fn size(&mut self, width: u8, height: u8) -> usize {
        self.sink.enqueue(&text::size(width, height))
    }

    // ------------------------------------------------------------------------
    // Paper control
    // ------------------------------------------------------------------------

    pub fn line_feed(&mut self, n: usize) -> usize {
        self.sink.enqueue(&commands::line_feed(n))
    }

    /// Feed `cut_offset` lines, then cut.
    pub fn cut(&mut self) -> usize {
        let feeds = self.line_feed(self.config.cut_offset);
        feeds + self.sink.enqueue(&commands::cut())
    }

    /// Cut, then deliver everything queued.
    pub fn print_and_cut(&mut self) -> Result<()> {
        self.cut();
        self.flush()
    }

    // ------------------------------------------------------------------------
    // Graphics
    // ------------------------------------------------------------------------

    /// Threshold `source` into a raster image and queue the `GS v 0` command.
    ///
    /// Dimension errors are raised before anything is queued.
    pub fn write_image<S: LumaSource + ?Sized>(
        &mut self,
        source: &S,
        options: ImageOptions,
    ) -> Result<usize> {
        self.config.check_image_width(source.width())?;
        raster::header_dimensions(source.width(), source.height())?;

        let bitmap = raster::rasterize(source, options.threshold);
        let command = bitmap.to_command()?;

        debug!(
            "image {}x{} -> {} bytes/row, {} ink dots, threshold {}",
            bitmap.width(),
            bitmap.height(),
            bitmap.width_bytes(),
            bitmap.ink_count(),
            options.threshold
        );

        Ok(self.sink.enqueue(&command))
    }

    pub fn write_qr_code(&mut self, _data: &[u8]) -> Result<usize> {
        Err(EscPosError::Unimplemented(Feature::QrCode))
    }

    pub fn write_barcode(&mut self, _data: &[u8]) -> Result<usize> {
        Err(EscPosError::Unimplemented(Feature::Barcode))
    }

    pub fn write_markdown(&mut self, _data: &[u8]) -> Result<usize> {
        Err(EscPosError::Unimplemented(Feature::Markdown))
    }

    // ------------------------------------------------------------------------
    // Delivery
    // ------------------------------------------------------------------------

    /// Deliver all queued bytes to the transport.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn pending(&self) -> &[u8] {
        self.sink.pending()
    }

    pub fn pending_len(&self) -> usize {
        self.sink.pending_len()
    }

    pub fn transport(&self) -> &W {
        self.sink.transport()
    }

    /// End the session and return the transport. Unflushed bytes are dropped.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

// ============================================================================
// TESTS
// ============================================================================
