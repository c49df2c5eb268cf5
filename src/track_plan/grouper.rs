//! Track grouper - decides which variants are exposed and how

use crate::error::Result;
use crate::output::{TrackEvent, TrackOutput};
use crate::playlist::{MasterPlaylist, Variant};

use super::classifier::Classification;

/// How the enabled set is derived from a classification
///
/// | video found | audio-only found | all audio-only | policy          |
/// |-------------|------------------|----------------|-----------------|
/// | yes         | any              | any            | `VideoOnly`     |
/// | no          | yes              | no             | `DropAudioOnly` |
/// | no          | yes              | yes            | `KeepAll`       |
/// | no          | no               | -              | `KeepAll`       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingPolicy {
    /// Keep exactly the video-bearing variants. Assumes the playlist tags
    /// variants consistently, so any video variant means all were found.
    VideoOnly,
    /// Remove the audio-only variants and keep the rest, including the
    /// ambiguous ones, which presumably carry video.
    DropAudioOnly,
    /// Keep every candidate; the set is treated as a single media type.
    KeepAll,
}

impl GroupingPolicy {
    /// Pick the policy for `total` candidates classified as `classification`
    pub fn decide(total: usize, classification: &Classification<'_>) -> Self {
        match (
            classification.video_bearing.is_empty(),
            classification.audio_only.is_empty(),
            classification.audio_only.len() == total,
        ) {
            (false, _, _) => GroupingPolicy::VideoOnly,
            (true, false, false) => GroupingPolicy::DropAudioOnly,
            (true, false, true) | (true, true, _) => GroupingPolicy::KeepAll,
        }
    }
}

/// Compute the enabled set, preserving candidate order
pub fn enabled_variants<'a>(
    candidates: &[&'a Variant],
    classification: &Classification<'a>,
) -> (GroupingPolicy, Vec<&'a Variant>) {
    let policy = GroupingPolicy::decide(candidates.len(), classification);

    let enabled = match policy {
        GroupingPolicy::VideoOnly => classification.video_bearing.clone(),
        GroupingPolicy::DropAudioOnly => candidates
            .iter()
            .copied()
            .filter(|v| !classification.is_audio_only(v))
            .collect(),
        GroupingPolicy::KeepAll => candidates.to_vec(),
    };

    tracing::debug!(
        "Grouping policy {:?}: {} of {} candidates enabled",
        policy,
        enabled.len(),
        candidates.len()
    );

    (policy, enabled)
}

/// Emit the tracks for an enabled set
///
/// With more than one enabled variant, one adaptive track is emitted first,
/// using `pick_default` for its initial variant. Every enabled variant is then
/// emitted as a fixed track, in order. Nothing is emitted for an empty set.
/// Returns the default index when an adaptive track was emitted.
pub fn emit_tracks<F>(
    playlist: &MasterPlaylist,
    enabled: &[&Variant],
    pick_default: F,
    output: &mut dyn TrackOutput,
) -> Result<Option<usize>>
where
    F: FnOnce(&[&Variant]) -> Result<usize>,
{
    let default_index = if enabled.len() > 1 {
        let default_index = pick_default(enabled)?;
        output.emit(
            playlist,
            TrackEvent::Adaptive {
                variants: enabled.iter().map(|&v| v.clone()).collect(),
                default_index,
            },
        );
        Some(default_index)
    } else {
        None
    };

    for &variant in enabled {
        output.emit(
            playlist,
            TrackEvent::Fixed {
                variant: variant.clone(),
            },
        );
    }

    Ok(default_index)
}
