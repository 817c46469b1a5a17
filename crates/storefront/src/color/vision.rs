//! Colorblind simulation.
//!
//! Each [`FilterMode`] maps to the 3x3 matrix the storefront feeds to its SVG
//! `feColorMatrix` preview filter. Applying the same matrix here lets product
//! swatches and sampled colors be previewed as a viewer with that deficiency
//! would see them.

use trueshade_core::{FilterMode, HexColor, Rgb};

type Matrix = [[f64; 3]; 3];

const IDENTITY: Matrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: Matrix = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];

const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

const ACHROMATOPSIA: Matrix = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

/// The color matrix for a filter mode.
#[must_use]
pub const fn matrix(mode: FilterMode) -> &'static Matrix {
    match mode {
        FilterMode::None => &IDENTITY,
        FilterMode::Protanopia => &PROTANOPIA,
        FilterMode::Deuteranopia => &DEUTERANOPIA,
        FilterMode::Tritanopia => &TRITANOPIA,
        FilterMode::Achromatopsia => &ACHROMATOPSIA,
    }
}

/// Render `rgb` as seen through `mode`.
#[must_use]
pub fn simulate(mode: FilterMode, rgb: Rgb) -> Rgb {
    if mode == FilterMode::None {
        return rgb;
    }

    let input = rgb.channels().map(f64::from);
    let rows = *matrix(mode);
    let [r, g, b] = rows.map(|row| {
        let value: f64 = row.iter().zip(input).map(|(w, c)| w * c).sum();
        to_channel(value)
    });
    Rgb::new(r, g, b)
}

/// Hex convenience wrapper over [`simulate`].
#[must_use]
pub fn simulate_hex(mode: FilterMode, color: &HexColor) -> HexColor {
    HexColor::from(simulate(mode, color.rgb()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=255 first
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
