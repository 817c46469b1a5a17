//! Coarse hue naming for sampled pixels.
//!
//! This is a heuristic partition of RGB space into seven named regions based
//! on the dominant channel, not a hue-angle computation.

use std::fmt;

use serde::Serialize;
use trueshade_core::Rgb;

use super::math::perceived_brightness;

/// Channel spread below which a pixel is treated as gray.
pub const NEUTRAL_SPREAD: u8 = 15;

/// Named hue bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HueName {
    Neutral,
    WarmRed,
    Magenta,
    Olive,
    Green,
    Violet,
    Blue,
}

impl HueName {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::WarmRed => "Warm Red",
            Self::Magenta => "Magenta",
            Self::Olive => "Olive",
            Self::Green => "Green",
            Self::Violet => "Violet",
            Self::Blue => "Blue",
        }
    }
}

impl fmt::Display for HueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Brightness band of a sampled color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tone {
    Bright,
    Calm,
    Deep,
}

impl Tone {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bright => "Bright Tone",
            Self::Calm => "Calm Tone",
            Self::Deep => "Deep Tone",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a pixel into one of seven hue buckets.
///
/// Branches are checked red, then green, then blue, so a pixel whose two
/// largest channels tie takes the earlier channel's bucket: `(200, 200, 0)`
/// is `WarmRed` and `(0, 200, 200)` is `Green`.
#[must_use]
pub fn name_color(rgb: Rgb) -> HueName {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max - min < NEUTRAL_SPREAD {
        HueName::Neutral
    } else if max == r {
        if g >= b {
            HueName::WarmRed
        } else {
            HueName::Magenta
        }
    } else if max == g {
        if r >= b {
            HueName::Olive
        } else {
            HueName::Green
        }
    } else if r >= g {
        HueName::Violet
    } else {
        HueName::Blue
    }
}

/// Brightness band: above 180 is bright, above 100 calm, otherwise deep.
#[must_use]
pub fn tone_name(rgb: Rgb) -> Tone {
    let brightness = perceived_brightness(rgb);
    if brightness > 180.0 {
        Tone::Bright
    } else if brightness > 100.0 {
        Tone::Calm
    } else {
        Tone::Deep
    }
}
