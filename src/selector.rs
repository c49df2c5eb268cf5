//! Track selector
//!
//! Ties the pipeline together for one master playlist: display pre-filter,
//! classification, grouping and default variant choice, with the resulting
//! tracks delivered to a [`TrackOutput`].

use serde::Serialize;

use crate::config::SelectorConfig;
use crate::display::{DisplayFilter, VariantFilter};
use crate::error::Result;
use crate::network::{NetworkCondition, NetworkProbe};
use crate::output::TrackOutput;
use crate::playlist::{MasterPlaylist, Variant};
use crate::track_plan::{
    emit_tracks, enabled_variants, DefaultVariantPicker, GroupingPolicy, VariantClassifier,
};

/// Summary of one selection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackSelection {
    /// Policy applied by the grouper
    pub policy: GroupingPolicy,
    /// Manifest indices of the enabled variants, in manifest order
    pub enabled: Vec<usize>,
    /// Default index within the enabled set, when an adaptive track was emitted
    pub default_index: Option<usize>,
}

/// Selects the tracks to expose for a master playlist
///
/// Holds only configuration; each [`select_tracks`](Self::select_tracks) call
/// is independent and may run concurrently with others.
#[derive(Debug, Clone)]
pub struct TrackSelector<F, P> {
    classifier: VariantClassifier,
    picker: DefaultVariantPicker,
    filter: F,
    probe: P,
}

impl<P: NetworkProbe> TrackSelector<DisplayFilter, P> {
    /// Build a selector using the configured display filter
    pub fn from_config(config: &SelectorConfig, probe: P) -> Self {
        Self::new(config, DisplayFilter::from_config(config.display.as_ref()), probe)
    }
}

impl<F: VariantFilter, P: NetworkProbe> TrackSelector<F, P> {
    pub fn new(config: &SelectorConfig, filter: F, probe: P) -> Self {
        Self {
            classifier: VariantClassifier::from_config(config),
            picker: DefaultVariantPicker::from_config(config),
            filter,
            probe,
        }
    }

    /// Run selection for `playlist`, emitting tracks to `output`
    pub fn select_tracks(
        &self,
        playlist: &MasterPlaylist,
        output: &mut dyn TrackOutput,
    ) -> Result<TrackSelection> {
        let candidates = self.filter.filter(&playlist.variants);
        let classification = self.classifier.classify(&candidates);
        let (policy, enabled) = enabled_variants(&candidates, &classification);

        let default_index = emit_tracks(
            playlist,
            &enabled,
            |variants: &[&Variant]| {
                let network = NetworkCondition::read(&self.probe);
                self.picker.pick(variants, network)
            },
            output,
        )?;

        Ok(TrackSelection {
            policy,
            enabled: enabled.iter().map(|v| v.index).collect(),
            default_index,
        })
    }
}
