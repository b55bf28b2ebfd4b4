//! Configuration file parsing for angular-smith
//!
//! Supports:
//! - `.ngsmith/config.toml` - Per-project settings

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings};
pub use types::*;
