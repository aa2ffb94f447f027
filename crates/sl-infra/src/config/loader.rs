//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read the TOML list configuration file
//! - Parse it into the [`ListConfig`] DTO
//! - Report I/O and parsing errors with context
//!
//! No validation and no business rules: whatever the file says is taken as
//! fact, and serde fills in the same defaults the server template would.

use anyhow::Context;
use sl_core::ListConfig;
use std::path::Path;

/// Load list configuration from a TOML file.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML or misses required keys
pub fn load_config(config_path: &Path) -> anyhow::Result<ListConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))
}
