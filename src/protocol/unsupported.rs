//! Print surfaces that exist on many ESC/POS printers but have no encoder
//! in this driver. Calls for them fail with
//! [`EscPosError::Unimplemented`](crate::EscPosError::Unimplemented).

use std::fmt;

/// A print feature without an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    QrCode,
    Barcode,
    Markdown,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::QrCode => "QR code printing",
            Self::Barcode => "barcode printing",
            Self::Markdown => "markdown printing",
        })
    }
}
