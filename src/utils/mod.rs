//! Utility functions shared by the index and the CLI.
//!
//! ## Modules
//!
//! - [`app_data`] - Application data directory and config discovery
//! - [`encoding`] - Little-endian integer encoding for on-disk headers

pub mod app_data;
pub mod encoding;

pub use app_data::*;
pub use encoding::*;
