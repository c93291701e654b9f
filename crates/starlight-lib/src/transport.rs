//! Byte transport: trait + hex-dump backend.
//!
//! BLE discovery and GATT writes live outside this crate. A [`Transport`]
//! only has to deliver one complete frame per call, in call order.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use crate::frame::format_hex;

// ── Error type ──

/// Transport errors.
///
/// `WriteFailed` payloads follow **"context: details"**, e.g.
/// `"hex dump: broken pipe"`.
#[derive(Debug)]
pub enum TransportError {
    NotConnected,
    WriteFailed(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotConnected => write!(f, "Not connected to a STARLIGHT controller"),
            TransportError::WriteFailed(e) => write!(f, "Write failed: {e}"),
        }
    }
}

impl std::error::Error for TransportError {}

pub type Result<T> = std::result::Result<T, TransportError>;

// ── Trait ──

pub trait Transport {
    /// Deliver one complete frame to the write characteristic.
    fn send(&self, bytes: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }
}

// ── Hex dump ──

/// Writes every frame as one line of space-separated upper-case hex.
///
/// Used for dry runs and for piping into an external BLE writer such as
/// `gatttool --char-write-req`.
pub struct HexDumpTransport<W: Write> {
    sink: RefCell<W>,
}

impl<W: Write> HexDumpTransport<W> {
    pub fn new(sink: W) -> Self {
        HexDumpTransport {
            sink: RefCell::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> Transport for HexDumpTransport<W> {
    fn send(&self, bytes: &[u8]) -> Result<()> {
        let mut sink = self.sink.borrow_mut();
        writeln!(sink, "{}", format_hex(bytes))
            .and_then(|()| sink.flush())
            .map_err(|e| TransportError::WriteFailed(format!("hex dump: {e}")))
    }
}

// ── Mock transport (for testing) ──

#[doc(hidden)]
pub mod mock {
    use super::*;
    use std::cell::Cell;

    /// In-memory transport for tests. Records every frame it accepts.
    #[derive(Default)]
    pub struct MockTransport {
        /// Frames accepted so far, in send order.
        pub sent: RefCell<Vec<Vec<u8>>>,
        /// If true, `send` returns `NotConnected`.
        pub disconnected: Cell<bool>,
        /// If set, the send with this zero-based index fails with `WriteFailed`.
        pub fail_at: Cell<Option<usize>>,
        attempts: Cell<usize>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Snapshot of the frames sent so far.
        pub fn frames(&self) -> Vec<Vec<u8>> {
            self.sent.borrow().clone()
        }

        /// Number of `send` calls, including failed ones.
        pub fn attempts(&self) -> usize {
            self.attempts.get()
        }
    }

    impl Transport for MockTransport {
        fn send(&self, bytes: &[u8]) -> Result<()> {
            let attempt = self.attempts.get();
            self.attempts.set(attempt + 1);
            if self.disconnected.get() {
                return Err(TransportError::NotConnected);
            }
            if self.fail_at.get() == Some(attempt) {
                return Err(TransportError::WriteFailed(format!(
                    "mock: injected failure on send {attempt}"
                )));
            }
            self.sent.borrow_mut().push(bytes.to_vec());
            Ok(())
        }
    }
}
