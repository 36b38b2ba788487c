//! # Error Types
//!
//! This module defines the error taxonomy of the driver: transport failures,
//! image dimension violations, and surfaces that have no encoding.

use std::io;

use thiserror::Error;

use crate::protocol::unsupported::Feature;

/// Main error type for driver operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// The underlying transport rejected a write or flush.
    ///
    /// The transport's own error is kept as-is and never retried here.
    #[error(transparent)]
    Transport(#[from] io::Error),

    /// Image is wider than the configured printer head
    #[error("image width {width} exceeds maximum of {max} dots/line")]
    ImageTooWide { width: u32, max: u32 },

    /// Image dimensions do not fit the 16-bit raster header fields
    #[error("image of {width_bytes} bytes x {height} rows does not fit a raster header")]
    ImageTooLarge { width_bytes: u32, height: u32 },

    /// Operation has no ESC/POS encoding in this driver
    #[error("{0} is not implemented")]
    Unimplemented(Feature),

    /// Printer configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Image file could not be loaded or saved
    #[error("image error: {0}")]
    Image(String),
}

impl EscPosError {
    /// Returns the transport error, if this is one.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EscPosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<image::ImageError> for EscPosError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EscPosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_is_transparent() {
        let err = EscPosError::from(io::Error::new(io::ErrorKind::BrokenPipe, "printer gone"));
        assert_eq!(err.to_string(), "printer gone");
        assert_eq!(err.as_io().map(io::Error::kind), Some(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_dimension_messages() {
        let err = EscPosError::ImageTooWide { width: 600, max: 576 };
        assert_eq!(err.to_string(), "image width 600 exceeds maximum of 576 dots/line");
    }

    #[test]
    fn test_unimplemented_message() {
        let err = EscPosError::Unimplemented(Feature::QrCode);
        assert_eq!(err.to_string(), "QR code printing is not implemented");
    }
}
