//! Master playlist model
//!
//! This module holds the input side of track selection:
//! - Variant records in master playlist order
//! - CODECS attribute parsing and prefix matching

pub mod codec;
pub mod variant;

pub use codec::{has_codec_with_prefix, parse_codecs, AUDIO_CODEC_PREFIX, VIDEO_CODEC_PREFIX};
pub use variant::{MasterPlaylist, Variant};
