//! Configuration file support
//!
//! Loads selector configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{DisplayConfig, SelectorConfig};
use crate::error::{Result, SelectorError};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Selection settings
    pub selection: SelectionSettings,
    /// Display pre-filter settings
    pub display: Option<DisplaySettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSettings {
    /// Minimum initial bitrate on a fast link, in bps
    pub fast_network_min_initial_bitrate: u64,
    /// Video codec prefix
    pub video_codec_prefix: Option<String>,
    /// Audio codec prefix
    pub audio_codec_prefix: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
    /// Allow orientation changes
    pub orientation_may_change: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| SelectorError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| SelectorError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        let defaults = SelectorConfig::default();
        Self {
            selection: SelectionSettings {
                fast_network_min_initial_bitrate: defaults.fast_network_min_initial_bitrate,
                video_codec_prefix: Some(defaults.video_codec_prefix),
                audio_codec_prefix: Some(defaults.audio_codec_prefix),
            },
            display: None,
            logging: Some(LoggingSettings {
                level: defaults.log_level,
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Log output format, "pretty" unless configured otherwise
    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("pretty")
    }

    /// Convert to SelectorConfig
    ///
    /// Empty codec prefixes are rejected, since an empty prefix would match
    /// every codec identifier.
    pub fn into_selector_config(self) -> Result<SelectorConfig> {
        let defaults = SelectorConfig::default();
        let video_codec_prefix = codec_prefix(
            "video_codec_prefix",
            self.selection.video_codec_prefix,
            defaults.video_codec_prefix,
        )?;
        let audio_codec_prefix = codec_prefix(
            "audio_codec_prefix",
            self.selection.audio_codec_prefix,
            defaults.audio_codec_prefix,
        )?;

        Ok(SelectorConfig {
            fast_network_min_initial_bitrate: self.selection.fast_network_min_initial_bitrate,
            video_codec_prefix,
            audio_codec_prefix,
            display: self.display.map(|d| DisplayConfig {
                viewport_width: d.viewport_width,
                viewport_height: d.viewport_height,
                orientation_may_change: d.orientation_may_change.unwrap_or(false),
            }),
            log_level: self
                .logging
                .map(|l| l.level)
                .unwrap_or(defaults.log_level),
        })
    }
}

fn codec_prefix(name: &str, value: Option<String>, default: String) -> Result<String> {
    match value {
        Some(prefix) if prefix.trim().is_empty() => Err(SelectorError::Config(format!(
            "selection.{} must not be empty",
            name
        ))),
        Some(prefix) => Ok(prefix),
        None => Ok(default),
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let config = ConfigFile::default_config();
    config.to_file(path)?;
    Ok(())
}
