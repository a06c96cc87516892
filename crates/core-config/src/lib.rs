//! Configuration loading and parsing.
//!
//! Parses `styledit.toml` (or an override path provided by the binary). Every
//! section is optional and every field has a default, so a missing file, an
//! empty file and a file that fails to parse all produce the same defaults.
//! Unknown fields are ignored to allow forward evolution.
//!
//! ```toml
//! [font]
//! family = "Arial"
//! size = 14
//!
//! [search]
//! match_case = true
//! replace_all = false
//!
//! [clipboard]
//! system = true
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "styledit.toml";

/// Inclusive bounds applied to the configured font size.
pub const FONT_SIZE_MIN: u32 = 1;
pub const FONT_SIZE_MAX: u32 = 400;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FontConfig {
    #[serde(default = "FontConfig::default_family")]
    pub family: String,
    #[serde(default = "FontConfig::default_size")]
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: Self::default_family(),
            size: Self::default_size(),
        }
    }
}

impl FontConfig {
    fn default_family() -> String {
        "Arial".to_string()
    }
    const fn default_size() -> u32 {
        14
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "SearchConfig::default_match_case")]
    pub match_case: bool,
    #[serde(default)]
    pub replace_all: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            match_case: Self::default_match_case(),
            replace_all: false,
        }
    }
}

impl SearchConfig {
    const fn default_match_case() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardConfig {
    /// Use the OS clipboard when the binary was built with it.
    #[serde(default = "ClipboardConfig::default_system")]
    pub system: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            system: Self::default_system(),
        }
    }
}

impl ClipboardConfig {
    const fn default_system() -> bool {
        true
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub path: Option<PathBuf>,
}

/// Best-effort config path: a local `styledit.toml` first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("styledit").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            let mut cfg = Config {
                raw: Some(content),
                file,
                path: Some(path),
            };
            cfg.clamp_font_size();
            Ok(cfg)
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Keep the configured font size inside `[FONT_SIZE_MIN, FONT_SIZE_MAX]`.
    /// Returns the effective value.
    pub fn clamp_font_size(&mut self) -> u32 {
        let raw = self.file.font.size;
        let clamped = raw.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        if clamped != raw {
            info!(
                target: "config",
                raw,
                clamped,
                min = FONT_SIZE_MIN,
                max = FONT_SIZE_MAX,
                "font_size_clamped"
            );
            self.file.font.size = clamped;
        }
        clamped
    }

    pub fn font_family(&self) -> &str {
        &self.file.font.family
    }

    pub fn font_size(&self) -> u32 {
        self.file.font.size
    }
}
