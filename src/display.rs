//! Device/display pre-filtering
//!
//! Narrows the master playlist to the variants worth offering on the current
//! display before any classification happens.

use crate::config::DisplayConfig;
use crate::playlist::Variant;

/// Fraction of the viewport a variant must cover to count as full screen
const FRACTION_TO_CONSIDER_FULLSCREEN: f64 = 0.98;

/// Stable filter producing the candidate variant list
pub trait VariantFilter {
    /// Return a subsequence of `variants`, in the same order
    fn filter<'a>(&self, variants: &'a [Variant]) -> Vec<&'a Variant>;
}

/// Pass-through filter
#[derive(Debug, Clone, Copy, Default)]
pub struct AllVariants;

impl VariantFilter for AllVariants {
    fn filter<'a>(&self, variants: &'a [Variant]) -> Vec<&'a Variant> {
        variants.iter().collect()
    }
}

/// Drops variants larger than needed to fill the viewport
///
/// The smallest variant that fills the viewport (within 2%) sets the pixel
/// ceiling; anything with more pixels is removed. Variants without a declared
/// resolution are always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportFilter {
    pub width: u32,
    pub height: u32,
    /// Allow the viewport to rotate to match the video orientation
    pub orientation_may_change: bool,
}

impl ViewportFilter {
    pub fn new(width: u32, height: u32, orientation_may_change: bool) -> Self {
        Self {
            width,
            height,
            orientation_may_change,
        }
    }

    /// Largest size with the video's aspect ratio that fits the viewport
    fn max_size_in_viewport(&self, video_width: u32, video_height: u32) -> (u64, u64) {
        let (mut viewport_width, mut viewport_height) = (self.width as u64, self.height as u64);
        let (video_width, video_height) = (video_width as u64, video_height as u64);

        if self.orientation_may_change
            && (video_width > video_height) != (viewport_width > viewport_height)
        {
            std::mem::swap(&mut viewport_width, &mut viewport_height);
        }

        if video_width * viewport_height >= video_height * viewport_width {
            // Width constrained
            (viewport_width, (viewport_width * video_height).div_ceil(video_width))
        } else {
            // Height constrained
            ((viewport_height * video_width).div_ceil(video_height), viewport_height)
        }
    }

    fn fills_viewport(&self, variant: &Variant) -> bool {
        let (max_width, max_height) = self.max_size_in_viewport(variant.width, variant.height);
        variant.width as u64 >= (max_width as f64 * FRACTION_TO_CONSIDER_FULLSCREEN) as u64
            && variant.height as u64 >= (max_height as f64 * FRACTION_TO_CONSIDER_FULLSCREEN) as u64
    }
}

impl From<&DisplayConfig> for ViewportFilter {
    fn from(config: &DisplayConfig) -> Self {
        Self::new(
            config.viewport_width,
            config.viewport_height,
            config.orientation_may_change,
        )
    }
}

impl VariantFilter for ViewportFilter {
    fn filter<'a>(&self, variants: &'a [Variant]) -> Vec<&'a Variant> {
        if self.width == 0 || self.height == 0 {
            return variants.iter().collect();
        }

        let max_pixels_to_retain = variants
            .iter()
            .filter(|v| v.has_resolution() && self.fills_viewport(v))
            .map(pixels)
            .min();

        let Some(max_pixels_to_retain) = max_pixels_to_retain else {
            return variants.iter().collect();
        };

        let retained: Vec<&Variant> = variants
            .iter()
            .filter(|v| !v.has_resolution() || pixels(v) <= max_pixels_to_retain)
            .collect();

        if retained.len() < variants.len() {
            tracing::debug!(
                "Viewport {}x{} filter removed {} variants above {} pixels",
                self.width,
                self.height,
                variants.len() - retained.len(),
                max_pixels_to_retain
            );
        }

        retained
    }
}

/// Filter selected by configuration
#[derive(Debug, Clone, Copy)]
pub enum DisplayFilter {
    All(AllVariants),
    Viewport(ViewportFilter),
}

impl DisplayFilter {
    pub fn from_config(config: Option<&DisplayConfig>) -> Self {
        match config {
            Some(display) => DisplayFilter::Viewport(ViewportFilter::from(display)),
            None => DisplayFilter::All(AllVariants),
        }
    }
}

impl VariantFilter for DisplayFilter {
    fn filter<'a>(&self, variants: &'a [Variant]) -> Vec<&'a Variant> {
        match self {
            DisplayFilter::All(filter) => filter.filter(variants),
            DisplayFilter::Viewport(filter) => filter.filter(variants),
        }
    }
}

fn pixels(variant: &Variant) -> u64 {
    variant.width as u64 * variant.height as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(index: usize, width: u32, height: u32) -> Variant {
        Variant::new(index, format!("{}.m3u8", index), 500_000, None).with_resolution(width, height)
    }

    fn indices(variants: &[&Variant]) -> Vec<usize> {
        variants.iter().map(|v| v.index).collect()
    }

    #[test]
    fn test_all_variants() {
        let variants = vec![variant(0, 640, 360), variant(1, 0, 0)];
        assert_eq!(indices(&AllVariants.filter(&variants)), vec![0, 1]);
    }

    #[test]
    fn test_viewport_drops_oversized() {
        let variants = vec![
            variant(0, 640, 360),
            variant(1, 1280, 720),
            variant(2, 1920, 1080),
            variant(3, 3840, 2160),
        ];
        let filter = ViewportFilter::new(1280, 720, false);
        assert_eq!(indices(&filter.filter(&variants)), vec![0, 1]);
    }

    #[test]
    fn test_viewport_keeps_unknown_resolution() {
        let variants = vec![
            variant(0, 0, 0),
            variant(1, 1280, 720),
            variant(2, 1920, 1080),
            variant(3, 0, 0),
        ];
        let filter = ViewportFilter::new(1280, 720, false);
        assert_eq!(indices(&filter.filter(&variants)), vec![0, 1, 3]);
    }

    #[test]
    fn test_viewport_nothing_fills_screen() {
        let variants = vec![variant(0, 640, 360), variant(1, 960, 540)];
        let filter = ViewportFilter::new(1920, 1080, false);
        assert_eq!(indices(&filter.filter(&variants)), vec![0, 1]);
    }

    #[test]
    fn test_viewport_orientation_change() {
        // Portrait viewport, landscape video
        let variants = vec![variant(0, 1280, 720), variant(1, 1920, 1080)];

        let fixed = ViewportFilter::new(720, 1280, false);
        // Fixed orientation: 1280x720 fills the 720px-wide viewport
        assert_eq!(indices(&fixed.filter(&variants)), vec![0]);

        let rotating = ViewportFilter::new(1080, 1920, true);
        // Rotated viewport is 1920x1080, so only the 1080p variant fills it
        assert_eq!(indices(&rotating.filter(&variants)), vec![0, 1]);
    }

    #[test]
    fn test_display_filter_from_config() {
        let variants = vec![variant(0, 1280, 720), variant(1, 1920, 1080)];
        assert_eq!(indices(&DisplayFilter::from_config(None).filter(&variants)), vec![0, 1]);

        let config = DisplayConfig {
            viewport_width: 1280,
            viewport_height: 720,
            orientation_may_change: false,
        };
        assert_eq!(
            indices(&DisplayFilter::from_config(Some(&config)).filter(&variants)),
            vec![0]
        );
    }
}
