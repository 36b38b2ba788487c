//! # Printer Configuration
//!
//! Per-session settings that depend on the physical printer, and per-image
//! encoding options.
//!
//! ## Presets
//!
//! | Preset | Paper | Print width | Cut offset |
//! |--------|-------|-------------|------------|
//! | `PAPER_80MM` | 80mm | 576 dots (72 bytes) | 5 feeds |
//! | `PAPER_58MM` | 58mm | 384 dots (48 bytes) | 5 feeds |
//!
//! ## Usage
//!
//! ```
//! use escpos_thermal::printer::PrinterConfig;
//!
//! let config = PrinterConfig::from_json(r#"{ "cut_offset": 3 }"#)?;
//! assert_eq!(config.cut_offset, 3);
//! assert_eq!(config.max_line_width_dots, None); // unlimited
//! # Ok::<(), escpos_thermal::EscPosError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EscPosError, Result};

/// Hardware settings for one print session.
///
/// Missing fields in a configuration file take the defaults: no feeds
/// before the cut and no image width limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Line feeds emitted before the cut opcode, to move the last printed
    /// line past the cutter blade.
    pub cut_offset: usize,

    /// Widest image the print head can take, in dots. `None` is unlimited.
    pub max_line_width_dots: Option<u32>,
}

impl PrinterConfig {
    /// 80mm paper, 576 dot head (Epson TM-T88 class)
    pub const PAPER_80MM: Self = Self {
        cut_offset: 5,
        max_line_width_dots: Some(576),
    };

    /// 58mm paper, 384 dot head
    pub const PAPER_58MM: Self = Self {
        cut_offset: 5,
        max_line_width_dots: Some(384),
    };

    pub fn with_cut_offset(self, cut_offset: usize) -> Self {
        Self { cut_offset, ..self }
    }

    pub fn with_max_line_width(self, dots: u32) -> Self {
        Self {
            max_line_width_dots: Some(dots),
            ..self
        }
    }

    /// Check an image width against the head width.
    pub fn check_image_width(&self, width: u32) -> Result<()> {
        match self.max_line_width_dots {
            Some(max) if width > max => Err(EscPosError::ImageTooWide { width, max }),
            _ => Ok(()),
        }
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| EscPosError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

/// Options for a single image write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    /// Pixels with luma strictly below this print as ink.
    pub threshold: u8,
}

impl ImageOptions {
    pub const DEFAULT_THRESHOLD: u8 = 128;

    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = PrinterConfig::default();
        assert_eq!(config.cut_offset, 0);
        assert_eq!(config.max_line_width_dots, None);
        assert!(config.check_image_width(u32::MAX).is_ok());
    }

    #[test]
    fn test_width_ceiling_is_inclusive() {
        let config = PrinterConfig::PAPER_80MM;
        assert!(config.check_image_width(576).is_ok());

        let err = config.check_image_width(577).unwrap_err();
        assert!(matches!(err, EscPosError::ImageTooWide { width: 577, max: 576 }));
    }

    #[test]
    fn test_builders() {
        let config = PrinterConfig::default()
            .with_cut_offset(2)
            .with_max_line_width(8);
        assert_eq!(
            config,
            PrinterConfig {
                cut_offset: 2,
                max_line_width_dots: Some(8)
            }
        );
    }

    #[test]
    fn test_json_missing_fields_fall_back() {
        let config = PrinterConfig::from_json("{}").unwrap();
        assert_eq!(config, PrinterConfig::default());

        let config = PrinterConfig::from_json(r#"{"max_line_width_dots": 384}"#).unwrap();
        assert_eq!(config.cut_offset, 0);
        assert_eq!(config.max_line_width_dots, Some(384));
    }

    #[test]
    fn test_json_invalid() {
        let err = PrinterConfig::from_json(r#"{"cut_offset": -1}"#).unwrap_err();
        assert!(matches!(err, EscPosError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PrinterConfig::load("/nonexistent/printer.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/printer.json"));
    }

    #[test]
    fn test_image_options_default() {
        assert_eq!(ImageOptions::default().threshold, 128);

        let options: ImageOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ImageOptions::default());
    }
}
