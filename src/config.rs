//! Resolver settings.
//!
//! Environment variables (optionally from `.env`) give the defaults;
//! command-line flags win over them.

use crate::error::{ResolverError, Result};
use std::path::PathBuf;

/// Overlay file to merge over the built-in table
pub const OVERLAY_ENV: &str = "M2M_NAMES_OVERLAY";
/// Default display mode ("true"/"false"/"1"/"0"/"yes"/"no"/"on"/"off")
pub const DISPLAY_LONG_ENV: &str = "M2M_NAMES_DISPLAY_LONG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub overlay_path: Option<PathBuf>,
    pub display_long_names: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            overlay_path: None,
            display_long_names: true,
        }
    }
}

impl ResolverConfig {
    /// Read from the process environment. Call `dotenv::dotenv()` first to
    /// pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(OVERLAY_ENV).filter(|p| !p.trim().is_empty()) {
            config.overlay_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(DISPLAY_LONG_ENV) {
            config.display_long_names = parse_flag(&raw).ok_or_else(|| {
                ResolverError::Config(format!("{} must be a boolean, got '{}'", DISPLAY_LONG_ENV, raw))
            })?;
        }

        Ok(config)
    }

    /// Apply command-line flags: an explicit overlay replaces the configured
    /// one, and `short` forces short names.
    pub fn with_cli_overrides(mut self, overlay: Option<PathBuf>, short: bool) -> Self {
        if let Some(path) = overlay {
            self.overlay_path = Some(path);
        }
        if short {
            self.display_long_names = false;
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
