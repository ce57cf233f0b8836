//! Optional TOML configuration for the exerciser.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rondo_model::CarouselConfig;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub carousel: Option<CarouselConfig>,
    pub items: Option<Vec<String>>,
}

impl FileConfig {
    /// The carousel section, falling back to engine defaults.
    pub fn carousel(&self) -> CarouselConfig {
        self.carousel.unwrap_or_default()
    }

    /// Whether the file explicitly set breakpoints (the TUI otherwise
    /// remaps the web-pixel defaults onto terminal-column tiers).
    pub fn has_breakpoints(&self) -> bool {
        use rondo_model::Breakpoints;
        self.carousel
            .is_some_and(|c| c.breakpoints != Breakpoints::default())
    }
}

pub fn load_optional(path: Option<&Path>) -> Result<FileConfig> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let parsed: FileConfig = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    parsed
        .carousel()
        .validate()
        .with_context(|| format!("validating config file {}", path.display()))?;
    Ok(parsed)
}
