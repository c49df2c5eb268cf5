//! Variant classifier - splits candidates into video-bearing and audio-only

use crate::config::SelectorConfig;
use crate::playlist::{has_codec_with_prefix, Variant, AUDIO_CODEC_PREFIX, VIDEO_CODEC_PREFIX};

/// Media kind a variant can be positively identified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Declares a resolution or a video codec
    Video,
    /// Declares an audio codec and nothing that indicates video
    AudioOnly,
}

/// Result of classifying a candidate list
///
/// Both buckets are stable filters of the candidate list. Variants that fit
/// neither bucket (no resolution, no recognized codec) are ambiguous and only
/// show up in the candidate list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub video_bearing: Vec<&'a Variant>,
    pub audio_only: Vec<&'a Variant>,
}

impl<'a> Classification<'a> {
    /// Number of candidates that landed in neither bucket
    pub fn ambiguous_count(&self, total: usize) -> usize {
        total - self.video_bearing.len() - self.audio_only.len()
    }

    /// Whether this exact variant was classified as audio-only
    ///
    /// Compares by reference, not by `index`, so variants that share an index
    /// are told apart.
    pub fn is_audio_only(&self, variant: &Variant) -> bool {
        self.audio_only.iter().any(|v| std::ptr::eq(*v, variant))
    }
}

/// Classifies variants by their declared attributes
#[derive(Debug, Clone)]
pub struct VariantClassifier {
    video_codec_prefix: String,
    audio_codec_prefix: String,
}

impl Default for VariantClassifier {
    fn default() -> Self {
        Self::new(VIDEO_CODEC_PREFIX, AUDIO_CODEC_PREFIX)
    }
}

impl VariantClassifier {
    pub fn new(video_codec_prefix: impl Into<String>, audio_codec_prefix: impl Into<String>) -> Self {
        Self {
            video_codec_prefix: video_codec_prefix.into(),
            audio_codec_prefix: audio_codec_prefix.into(),
        }
    }

    pub fn from_config(config: &SelectorConfig) -> Self {
        Self::new(
            config.video_codec_prefix.clone(),
            config.audio_codec_prefix.clone(),
        )
    }

    /// Classify a single variant, `None` when it is ambiguous
    ///
    /// Rules are checked in order: declared height, video codec, audio codec.
    pub fn classify_variant(&self, variant: &Variant) -> Option<VariantKind> {
        if variant.height > 0 || has_codec_with_prefix(&variant.codecs, &self.video_codec_prefix) {
            Some(VariantKind::Video)
        } else if has_codec_with_prefix(&variant.codecs, &self.audio_codec_prefix) {
            Some(VariantKind::AudioOnly)
        } else {
            None
        }
    }

    /// Partition candidates into video-bearing and audio-only, keeping order
    pub fn classify<'a>(&self, candidates: &[&'a Variant]) -> Classification<'a> {
        let mut classification = Classification::default();

        for &variant in candidates {
            match self.classify_variant(variant) {
                Some(VariantKind::Video) => classification.video_bearing.push(variant),
                Some(VariantKind::AudioOnly) => classification.audio_only.push(variant),
                None => {}
            }
        }

        tracing::debug!(
            "Classified {} candidates: {} video, {} audio-only, {} ambiguous",
            candidates.len(),
            classification.video_bearing.len(),
            classification.audio_only.len(),
            classification.ambiguous_count(candidates.len())
        );

        classification
    }
}
