//! Configuration to acknowledge presenter preferences as well as set defaults.
//!
//! Specifically, we try to find a treedeck.toml (or the file named with `--config`), and if
//! present we load settings from there. A missing or malformed file falls back to defaults.

use crate::builder::DEFAULT_UNTITLED_TITLE;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "treedeck.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from treedeck.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_UNTITLED_TITLE.to_string())]
    /// Heading text shown for sections that have no heading of their own.
    pub untitled_title: String,
    #[facet(default = false)]
    /// Start the presenter with linear navigation switched on.
    pub linear_navigation: bool,
    #[facet(default = 100)]
    /// Maximum line width for slide body text.
    pub wrap_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            untitled_title: DEFAULT_UNTITLED_TITLE.to_string(),
            linear_navigation: false,
            wrap_width: 100,
        }
    }
}

impl Config {
    #[must_use]
    /// Parses a TOML document, `None` when it does not describe a config.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }

    #[must_use]
    /// Load configuration from `path`, or from treedeck.toml when no path is given.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE));
        let Ok(contents) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        Self::from_toml(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "malformed config file, using defaults");
            Self::default()
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
