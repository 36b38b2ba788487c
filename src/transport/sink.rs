//! # Buffered Command Sink
//!
//! Encoders never touch the transport directly. They append to an in-memory
//! queue, and [`CommandSink::flush`] hands the queue to the transport in one
//! go. Bytes reach the transport in exactly the order they were queued.
//!
//! ## Failed Flushes
//!
//! A flush that fails keeps every byte the transport did not accept. Bytes
//! the transport had already taken are dropped from the queue, so a later
//! flush resumes where the failed one stopped:
//!
//! ```text
//! queue:     [A A A B B B C C]
//! transport accepts 5 bytes, then errors
//! queue:     [B C C]          <- next flush starts here
//! ```
//!
//! Once every byte has been written, the queue is emptied and the transport's
//! own `flush` runs. If that flush fails, the error is returned but nothing
//! is re-queued: the bytes now sit in the transport's buffer (a
//! `BufWriter`, a socket send buffer) and whether they reach the printer is
//! up to the transport.
//!
//! There is no automatic retry.

use std::io::{self, Write};

use log::{debug, trace, warn};

/// Ordered byte queue in front of a transport.
#[derive(Debug)]
pub struct CommandSink<W: Write> {
    transport: W,
    queue: Vec<u8>,
}

impl<W: Write> CommandSink<W> {
    pub fn new(transport: W) -> Self {
        Self {
            transport,
            queue: Vec::new(),
        }
    }

    /// Append `bytes` to the queue and return how many were queued.
    ///
    /// An empty slice is a no-op.
    pub fn enqueue(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        trace!("enqueue {:02X?}", bytes);
        self.queue.extend_from_slice(bytes);
        bytes.len()
    }

    /// Deliver the whole queue to the transport, then flush the transport.
    ///
    /// On success the queue is empty. On a write failure the transport's
    /// error is returned unchanged and undelivered bytes stay queued. On a
    /// failure of the transport's own `flush`, the queue is already empty.
    pub fn flush(&mut self) -> io::Result<()> {
        let total = self.queue.len();
        let mut delivered = 0;

        while delivered < total {
            match self.transport.write(&self.queue[delivered..]) {
                Ok(0) => {
                    return Err(self.fail(
                        delivered,
                        io::Error::new(io::ErrorKind::WriteZero, "transport accepted no bytes"),
                    ));
                }
                Ok(n) => delivered += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(self.fail(delivered, e)),
            }
        }

        self.queue.clear();

        if let Err(e) = self.transport.flush() {
            warn!("transport flush failed after {} bytes were written: {}", total, e);
            return Err(e);
        }

        debug!("flushed {} bytes", total);
        Ok(())
    }

    fn fail(&mut self, delivered: usize, err: io::Error) -> io::Error {
        self.queue.drain(..delivered);
        warn!(
            "flush failed after {} bytes, {} bytes still pending: {}",
            delivered,
            self.queue.len(),
            err
        );
        err
    }

    /// Bytes queued and not yet delivered.
    pub fn pending(&self) -> &[u8] {
        &self.queue
    }

    /// Number of bytes queued and not yet delivered.
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    pub fn transport(&self) -> &W {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut W {
        &mut self.transport
    }

    /// Take back the transport. Undelivered bytes are discarded.
    pub fn into_inner(self) -> W {
        if !self.queue.is_empty() {
            warn!("discarding {} undelivered bytes", self.queue.len());
        }
        self.transport
    }
}

// ============================================================================
// TESTS
// ============================================================================
