//! Selector configuration

use serde::{Deserialize, Serialize};

use crate::playlist::{AUDIO_CODEC_PREFIX, VIDEO_CODEC_PREFIX};
use crate::track_plan::FAST_NETWORK_MIN_INITIAL_BITRATE;

/// Display the variants are pre-filtered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Viewport width in pixels
    pub viewport_width: u32,

    /// Viewport height in pixels
    pub viewport_height: u32,

    /// Whether the viewport may rotate to match the video orientation
    pub orientation_may_change: bool,
}

/// Track selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Bitrate the initial variant must exceed on a fast link, in bps
    pub fast_network_min_initial_bitrate: u64,

    /// Codec identifier prefix marking a variant as video-bearing
    pub video_codec_prefix: String,

    /// Codec identifier prefix marking a variant as audio-only
    pub audio_codec_prefix: String,

    /// Display pre-filter; all variants are candidates when absent
    pub display: Option<DisplayConfig>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            fast_network_min_initial_bitrate: FAST_NETWORK_MIN_INITIAL_BITRATE,
            video_codec_prefix: VIDEO_CODEC_PREFIX.to_string(),
            audio_codec_prefix: AUDIO_CODEC_PREFIX.to_string(),
            display: None,
            log_level: "info".to_string(),
        }
    }
}
