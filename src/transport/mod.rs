//! # Printer Transport Layer
//!
//! Any ordered byte sink implementing [`std::io::Write`] can carry print
//! data: a `TcpStream` to a network printer on port 9100, a serial device
//! opened as a `File`, or a plain file for capturing output. Opening and
//! reconnecting those is left to the caller.
//!
//! [`CommandSink`] queues encoded commands in front of the transport until
//! they are flushed.

pub mod sink;

pub use sink::CommandSink;
