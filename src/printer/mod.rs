//! # Printer Module
//!
//! Session-level state: hardware configuration and the print session that
//! ties encoders to a transport.
//!
//! ## Modules
//!
//! - [`config`]: Cut offset, head width and image options
//! - [`session`]: The [`PrintSession`] façade

pub mod config;
pub mod session;

pub use config::{ImageOptions, PrinterConfig};
pub use session::PrintSession;
