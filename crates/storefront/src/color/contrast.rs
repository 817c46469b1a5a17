//! Text-color guidance for a sampled background color.

use std::fmt;

use serde::Serialize;
use trueshade_core::Rgb;

use super::math::contrast_ratio;

/// Which text treatment the readout recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextColor {
    /// Contrast against white won (or tied).
    Dark,
    /// Contrast against black won.
    Light,
}

impl TextColor {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Best on Dark Text",
            Self::Light => "Best on Light Text",
        }
    }
}

/// Contrast recommendation for a sampled color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneAdvice {
    pub best: TextColor,
    /// The winning contrast ratio, in `[1, 21]`.
    pub ratio: f64,
}

impl ToneAdvice {
    /// Ratio formatted to one decimal place, e.g. `"12.6:1"`.
    #[must_use]
    pub fn ratio_label(&self) -> String {
        format!("{:.1}:1", self.ratio)
    }
}

impl fmt::Display for ToneAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} • {} contrast", self.best.label(), self.ratio_label())
    }
}

/// Compare `rgb` against pure white and pure black and keep the stronger pairing.
///
/// A tie goes to [`TextColor::Dark`].
#[must_use]
pub fn describe_tone(rgb: Rgb) -> ToneAdvice {
    let vs_white = contrast_ratio(rgb, Rgb::WHITE);
    let vs_black = contrast_ratio(rgb, Rgb::BLACK);

    if vs_white >= vs_black {
        ToneAdvice {
            best: TextColor::Dark,
            ratio: vs_white,
        }
    } else {
        ToneAdvice {
            best: TextColor::Light,
            ratio: vs_black,
        }
    }
}
