//! HLS track selection
//!
//! Given the variants of a parsed HLS master playlist, decides which ones are
//! video-bearing and which are audio-only, which subset to expose as one
//! adaptive track and as fixed tracks, and which variant an adaptive track
//! should start on given the current network.
//!
//! ```
//! use hls_track_select::{MasterPlaylist, SelectorConfig, TrackEvent, TrackSelector, Variant};
//!
//! let playlist = MasterPlaylist::new(
//!     None,
//!     vec![
//!         Variant::new(0, "360p.m3u8", 400_000, None).with_resolution(640, 360),
//!         Variant::new(1, "720p.m3u8", 1_500_000, None).with_resolution(1280, 720),
//!     ],
//! );
//!
//! let selector = TrackSelector::from_config(&SelectorConfig::default(), true);
//! let mut events: Vec<TrackEvent> = Vec::new();
//! let selection = selector.select_tracks(&playlist, &mut events).unwrap();
//!
//! assert_eq!(selection.default_index, Some(1));
//! assert_eq!(events.len(), 3);
//! ```

pub mod config;
pub mod config_file;
pub mod display;
pub mod error;
pub mod network;
pub mod output;
pub mod playlist;
pub mod selector;
pub mod track_plan;

pub use config::{DisplayConfig, SelectorConfig};
pub use display::{AllVariants, DisplayFilter, VariantFilter, ViewportFilter};
pub use error::{Result, SelectorError};
pub use network::{NetworkCondition, NetworkProbe};
pub use output::{TrackEvent, TrackOutput};
pub use playlist::{MasterPlaylist, Variant};
pub use selector::{TrackSelection, TrackSelector};
pub use track_plan::{
    Classification, DefaultVariantPicker, GroupingPolicy, VariantClassifier, VariantKind,
};
