//! Track planning
//!
//! Runs in strict sequence over a candidate variant list:
//! - Classify variants as video-bearing, audio-only or ambiguous
//! - Group the classification into the enabled set
//! - Pick the initial variant for the adaptive track

pub mod classifier;
pub mod grouper;
pub mod picker;

pub use classifier::{Classification, VariantClassifier, VariantKind};
pub use grouper::{emit_tracks, enabled_variants, GroupingPolicy};
pub use picker::{DefaultVariantPicker, FAST_NETWORK_MIN_INITIAL_BITRATE};
