//! Default variant picker - initial variant for an adaptive track

use crate::config::SelectorConfig;
use crate::error::{Result, SelectorError};
use crate::network::NetworkCondition;
use crate::playlist::Variant;

/// Minimum initial bitrate on a fast link ("prefer at least 1 Mbps at start")
pub const FAST_NETWORK_MIN_INITIAL_BITRATE: u64 = 1_000_000;

/// Chooses the initial variant of an adaptive track
#[derive(Debug, Clone)]
pub struct DefaultVariantPicker {
    fast_network_min_initial_bitrate: u64,
}

impl Default for DefaultVariantPicker {
    fn default() -> Self {
        Self::new(FAST_NETWORK_MIN_INITIAL_BITRATE)
    }
}

impl DefaultVariantPicker {
    pub fn new(fast_network_min_initial_bitrate: u64) -> Self {
        Self {
            fast_network_min_initial_bitrate,
        }
    }

    pub fn from_config(config: &SelectorConfig) -> Self {
        Self::new(config.fast_network_min_initial_bitrate)
    }

    /// Bitrate the initial variant has to exceed
    pub fn min_initial_bitrate(&self, network: NetworkCondition) -> u64 {
        if network.is_fast() {
            self.fast_network_min_initial_bitrate
        } else {
            0
        }
    }

    /// Index within `variants` of the initial variant
    ///
    /// Variants are scanned in the order given (manifest order, not bitrate
    /// order) and the first one whose bitrate exceeds the floor wins. Falls back
    /// to 0 when none does. An empty slice is a caller bug and is reported as
    /// [`SelectorError::EmptyVariantSet`].
    pub fn pick(&self, variants: &[&Variant], network: NetworkCondition) -> Result<usize> {
        if variants.is_empty() {
            return Err(SelectorError::EmptyVariantSet);
        }

        let floor = self.min_initial_bitrate(network);
        let index = variants
            .iter()
            .position(|v| v.bitrate > floor)
            .unwrap_or(0);

        tracing::debug!(
            "Default variant index {} of {} (floor {} bps)",
            index,
            variants.len(),
            floor
        );

        Ok(index)
    }
}
