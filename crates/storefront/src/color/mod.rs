//! Color analysis pipeline.
//!
//! A sampled pixel flows through [`math`] (hex encoding, luminance, contrast),
//! then [`classifier`] and [`contrast`] turn it into display strings. The
//! [`vision`] module previews colors through the colorblind filters.

pub mod classifier;
pub mod contrast;
pub mod math;
pub mod vision;

use serde::Serialize;
use trueshade_core::{HexColor, Rgb};

pub use classifier::{HueName, Tone, name_color, tone_name};
pub use contrast::{TextColor, ToneAdvice, describe_tone};
pub use math::{contrast_ratio, relative_luminance, rgb_to_hex, shade};

/// Everything the color readout panel shows for one sampled pixel.
///
/// Recomputed per sample and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledColor {
    pub rgb: Rgb,
    pub hex: HexColor,
    pub hue: HueName,
    pub tone: Tone,
    pub advice: ToneAdvice,
}

impl SampledColor {
    /// Run the full analysis pipeline for one pixel.
    #[must_use]
    pub fn analyze(rgb: Rgb) -> Self {
        Self {
            rgb,
            hex: HexColor::from(rgb),
            hue: name_color(rgb),
            tone: tone_name(rgb),
            advice: describe_tone(rgb),
        }
    }
}
