//! Track selection output
//!
//! Selection results are delivered as [`TrackEvent`]s to a caller supplied
//! [`TrackOutput`] sink, so the selection logic does not depend on any
//! particular player.

use serde::Serialize;

use crate::playlist::{MasterPlaylist, Variant};

/// A track exposed to the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackEvent {
    /// One switchable track spanning all enabled variants
    Adaptive {
        variants: Vec<Variant>,
        default_index: usize,
    },
    /// A single variant exposed as a fixed-bitrate track
    Fixed { variant: Variant },
}

impl TrackEvent {
    /// Variants and default index, if this is an adaptive track
    pub fn adaptive_track(&self) -> Option<(&[Variant], usize)> {
        match self {
            TrackEvent::Adaptive {
                variants,
                default_index,
            } => Some((variants, *default_index)),
            TrackEvent::Fixed { .. } => None,
        }
    }

    /// The variant, if this is a fixed track
    pub fn fixed_track(&self) -> Option<&Variant> {
        match self {
            TrackEvent::Fixed { variant } => Some(variant),
            TrackEvent::Adaptive { .. } => None,
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, TrackEvent::Adaptive { .. })
    }
}

/// Receiver of selected tracks
pub trait TrackOutput {
    fn emit(&mut self, playlist: &MasterPlaylist, event: TrackEvent);
}

impl TrackOutput for Vec<TrackEvent> {
    fn emit(&mut self, _playlist: &MasterPlaylist, event: TrackEvent) {
        self.push(event);
    }
}

impl<F> TrackOutput for F
where
    F: FnMut(&MasterPlaylist, TrackEvent),
{
    fn emit(&mut self, playlist: &MasterPlaylist, event: TrackEvent) {
        self(playlist, event)
    }
}
