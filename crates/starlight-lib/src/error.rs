//! Unified error type for the starlight-lib crate.
//!
//! [`StarlightError`] wraps module-specific errors (`TransportError`,
//! `FrameError`) and domain-specific error kinds (`Config`, `Color`).
//! `From` impls allow `?` to propagate across module boundaries.
//!
//! Encoding itself never fails: every encoder clamps or wraps its input.

use std::fmt;

use crate::frame::FrameError;
use crate::transport::TransportError;

/// Unified error type for starlight-lib operations.
#[derive(Debug)]
pub enum StarlightError {
    /// Transport failure (not connected, write rejected).
    Transport(TransportError),
    /// Malformed frame bytes handed to the decoder.
    Frame(FrameError),
    /// Standard I/O error (config persistence).
    Io(std::io::Error),
    /// Configuration validation error.
    Config(String),
    /// Color parsing error.
    Color(String),
}

impl fmt::Display for StarlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarlightError::Transport(e) => write!(f, "{e}"),
            StarlightError::Frame(e) => write!(f, "{e}"),
            StarlightError::Io(e) => write!(f, "I/O error: {e}"),
            StarlightError::Config(e) => write!(f, "Config error: {e}"),
            StarlightError::Color(e) => write!(f, "Color error: {e}"),
        }
    }
}

impl std::error::Error for StarlightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StarlightError::Transport(e) => Some(e),
            StarlightError::Frame(e) => Some(e),
            StarlightError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for StarlightError {
    fn from(e: TransportError) -> Self {
        StarlightError::Transport(e)
    }
}

impl From<FrameError> for StarlightError {
    fn from(e: FrameError) -> Self {
        StarlightError::Frame(e)
    }
}

impl From<std::io::Error> for StarlightError {
    fn from(e: std::io::Error) -> Self {
        StarlightError::Io(e)
    }
}

/// Crate-level Result alias using [`StarlightError`].
pub type Result<T> = std::result::Result<T, StarlightError>;
