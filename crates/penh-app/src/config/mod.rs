//! Configuration file parsing for Permissions Enhancer
//!
//! Supports:
//! - `.penh/config.toml` - Selectors, class prefix and indicator glyphs

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_file, parse_settings};
pub use types::*;
