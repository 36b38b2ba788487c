//! # Session Tests
//!
//! End-to-end checks of what a print session delivers to its transport,
//! using a transport double that records every write and can be told to
//! fail.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use escpos_thermal::protocol::text::{Justify, Underline};
use escpos_thermal::render::LumaBuffer;
use escpos_thermal::{EscPosError, ImageOptions, PrintSession, PrinterConfig};
use pretty_assertions::assert_eq;

// ============================================================================
// TRANSPORT DOUBLE
// ============================================================================

#[derive(Default)]
struct Recorded {
    writes: Vec<Vec<u8>>,
    flushes: usize,
    failing: bool,
}

impl Recorded {
    fn delivered(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

#[derive(Clone, Default)]
struct RecordingTransport(Rc<RefCell<Recorded>>);

impl RecordingTransport {
    fn delivered(&self) -> Vec<u8> {
        self.0.borrow().delivered()
    }

    fn set_failing(&self, failing: bool) {
        self.0.borrow_mut().failing = failing;
    }
}

impl Write for RecordingTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.0.borrow_mut();
        if state.failing {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "printer offline"));
        }
        state.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flushes += 1;
        Ok(())
    }
}

fn session_with(config: PrinterConfig) -> (PrintSession<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    (PrintSession::new(transport.clone(), config), transport)
}

// ============================================================================
// DELIVERY
// ============================================================================

#[test]
fn test_bold_feed_cut_scenario() {
    let (mut session, transport) = session_with(PrinterConfig {
        cut_offset: 2,
        max_line_width_dots: Some(8),
    });

    session.bold(true);
    session.line_feed(1);
    session.bold(false);
    session.print_and_cut().unwrap();

    assert_eq!(
        transport.delivered(),
        vec![
            0x1B, 0x45, 0x01, // bold on
            0x0A, // explicit feed
            0x1B, 0x45, 0x00, // bold off
            0x0A, 0x0A, // cut offset
            0x1D, 0x56, 0x01, // cut
        ]
    );
    assert_eq!(transport.0.borrow().flushes, 1);
}

#[test]
fn test_nothing_delivered_until_flush() {
    let (mut session, transport) = session_with(PrinterConfig::default());

    session.text("queued");
    session.cut();
    assert!(transport.delivered().is_empty());
    assert_eq!(transport.0.borrow().flushes, 0);

    session.flush().unwrap();
    assert_eq!(transport.delivered(), b"queued\x1D\x56\x01".to_vec());
}

#[test]
fn test_flush_delivers_in_call_order_across_flushes() {
    let (mut session, transport) = session_with(PrinterConfig::default());

    session.underline(Underline::OneDot);
    session.text("A");
    session.flush().unwrap();

    session.justify(Justify::Center);
    session.size(1, 1);
    session.text("B");
    session.flush().unwrap();

    let mut expected = vec![0x1B, 0x2D, 0x01];
    expected.extend(b"A");
    expected.extend([0x1B, 0x61, 0x01, 0x1D, 0x21, 0x11]);
    expected.extend(b"B");

    assert_eq!(transport.delivered(), expected);
    assert_eq!(session.pending_len(), 0);
}

#[test]
fn test_flush_without_pending_bytes() {
    let (mut session, transport) = session_with(PrinterConfig::default());
    session.flush().unwrap();

    assert!(transport.0.borrow().writes.is_empty());
    assert_eq!(transport.0.borrow().flushes, 1);
}

#[test]
fn test_image_is_delivered_as_header_then_data() {
    let (mut session, transport) = session_with(PrinterConfig::default().with_max_line_width(16));

    // 9x1: only the leftmost pixel is dark
    let source = LumaBuffer::from_fn(9, 1, |x, _| if x == 0 { 10 } else { 250 });
    let n = session.write_image(&source, ImageOptions::default()).unwrap();
    session.flush().unwrap();

    assert_eq!(n, 10);
    assert_eq!(
        transport.delivered(),
        vec![0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x01, 0x00, 0b1000_0000, 0x00]
    );
}

#[test]
fn test_image_encoding_is_deterministic() {
    let source = LumaBuffer::from_fn(50, 20, |x, y| ((x * 31 + y * 17) % 256) as u8);
    let options = ImageOptions::with_threshold(90);

    let (mut first, first_out) = session_with(PrinterConfig::default());
    first.write_image(&source, options).unwrap();
    first.flush().unwrap();

    let (mut second, second_out) = session_with(PrinterConfig::default());
    second.write_image(&source, options).unwrap();
    second.flush().unwrap();

    assert_eq!(first_out.delivered(), second_out.delivered());
}

// ============================================================================
// ERRORS AND LEFTOVER STATE
// ============================================================================

#[test]
fn test_too_wide_image_leaves_queue_untouched() {
    let (mut session, transport) = session_with(PrinterConfig::PAPER_58MM);
    session.text("before");
    let before = session.pending().to_vec();

    let wide = LumaBuffer::filled(385, 4, 0);
    let err = session.write_image(&wide, ImageOptions::default()).unwrap_err();

    assert!(matches!(err, EscPosError::ImageTooWide { width: 385, max: 384 }));
    assert_eq!(session.pending(), &before[..]);

    // The session stays usable and earlier bytes still go out
    session.flush().unwrap();
    assert_eq!(transport.delivered(), b"before".to_vec());
}

#[test]
fn test_transport_error_is_surfaced_unchanged() {
    let (mut session, transport) = session_with(PrinterConfig::default());
    transport.set_failing(true);

    session.text("x");
    let err = session.flush().unwrap_err();

    let io_err = err.as_io().expect("transport error");
    assert_eq!(io_err.kind(), io::ErrorKind::ConnectionReset);
    assert_eq!(io_err.to_string(), "printer offline");
}

#[test]
fn test_failed_print_and_cut_keeps_bytes_for_next_flush() {
    let (mut session, transport) = session_with(PrinterConfig::default().with_cut_offset(1));
    session.text("receipt");

    transport.set_failing(true);
    assert!(session.print_and_cut().is_err());
    assert!(transport.delivered().is_empty());
    assert_eq!(session.pending(), b"receipt\x0A\x1D\x56\x01");

    transport.set_failing(false);
    session.flush().unwrap();
    assert_eq!(transport.delivered(), b"receipt\x0A\x1D\x56\x01".to_vec());
    assert_eq!(session.pending_len(), 0);
}

#[test]
fn test_unimplemented_surfaces_do_not_touch_the_queue() {
    let (mut session, transport) = session_with(PrinterConfig::default());
    session.bold(true);

    let err = session.write_qr_code(b"hello").unwrap_err();
    assert_eq!(err.to_string(), "QR code printing is not implemented");
    assert!(session.write_barcode(b"123").is_err());
    assert!(session.write_markdown(b"**hi**").is_err());

    session.flush().unwrap();
    assert_eq!(transport.delivered(), vec![0x1B, 0x45, 0x01]);
}
