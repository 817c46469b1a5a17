//! Numeric color helpers: hex encoding, shading, and WCAG luminance/contrast.

use trueshade_core::{ColorError, HexColor, Rgb};

/// Gamma-expansion threshold from the WCAG 2.x relative luminance definition.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Channel weights for relative luminance (Rec. 709 primaries).
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Offset added to both luminances in the contrast ratio.
const FLARE: f64 = 0.05;

/// Darkening applied to a product color for its gradient companion.
pub const GRADIENT_SHADE: i32 = -12;

/// Encode channels as a lowercase `#rrggbb` string.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from(Rgb::new(r, g, b))
}

/// Add `amount` to every channel of `hex`, clamping each to `0..=255`.
///
/// # Errors
///
/// Returns [`ColorError`] if `hex` is not a six-digit hex color.
pub fn shade(hex: &str, amount: i32) -> Result<HexColor, ColorError> {
    let color = HexColor::parse(hex)?;
    Ok(shade_color(&color, amount))
}

/// Infallible form of [`shade`] for already-parsed colors.
#[must_use]
pub fn shade_color(color: &HexColor, amount: i32) -> HexColor {
    let Rgb { r, g, b } = color.rgb();
    let shifted = Rgb::clamped(
        i32::from(r).saturating_add(amount),
        i32::from(g).saturating_add(amount),
        i32::from(b).saturating_add(amount),
    );
    HexColor::from(shifted)
}

/// The `(darker, base)` pair used to paint a product card gradient.
#[must_use]
pub fn gradient_pair(color: &HexColor) -> (HexColor, HexColor) {
    (shade_color(color, GRADIENT_SHADE), color.clone())
}

fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    rgb.channels()
        .into_iter()
        .zip(LUMA_WEIGHTS)
        .map(|(channel, weight)| weight * linearize(channel))
        .sum()
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// Argument order does not matter; the lighter color is always the numerator.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Weighted brightness on raw `0..=255` channels (no gamma expansion).
#[must_use]
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    rgb.channels()
        .into_iter()
        .zip(LUMA_WEIGHTS)
        .map(|(channel, weight)| weight * f64::from(channel))
        .sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(255, 0, 0).as_str(), "#ff0000");
        assert_eq!(rgb_to_hex(0, 10, 171).as_str(), "#000aab");
    }

    #[test]
    fn test_shade_clamps_low() {
        assert_eq!(shade("#ff0000", -300).unwrap().as_str(), "#000000");
    }

    #[test]
    fn test_shade_clamps_high() {
        assert_eq!(shade("#000000", 300).unwrap().as_str(), "#ffffff");
    }

    #[test]
    fn test_shade_partial_clamp() {
        // Only channels that overflow are clamped.
        assert_eq!(shade("#ff7a4a", 20).unwrap().as_str(), "#ff8e5e");
        assert_eq!(shade("#6ae3ff", -12).unwrap().as_str(), "#5ed7f3");
    }

    #[test]
    fn test_shade_rejects_malformed() {
        assert!(shade("#12345", 10).is_err());
        assert!(shade("not-a-color", 10).is_err());
    }

    #[test]
    fn test_gradient_pair() {
        let base = HexColor::parse("#1eb5a1").unwrap();
        let (dark, light) = gradient_pair(&base);
        assert_eq!(dark.as_str(), "#12a995");
        assert_eq!(light, base);
    }

    #[test]
    fn test_luminance_bounds() {
        assert!(relative_luminance(Rgb::BLACK).abs() < EPS);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 = 0.0392 sits just under the threshold.
        let l = relative_luminance(Rgb::new(10, 10, 10));
        assert!((l - (10.0 / 255.0) / 12.92).abs() < EPS);
    }

    #[test]
    fn test_contrast_identical_is_one() {
        for rgb in [Rgb::BLACK, Rgb::WHITE, Rgb::new(30, 144, 255)] {
            assert!((contrast_ratio(rgb, rgb) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_contrast_black_white_is_max() {
        assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < EPS);
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let a = Rgb::new(255, 122, 74);
        let b = Rgb::new(47, 54, 69);
        assert!((contrast_ratio(a, b) - contrast_ratio(b, a)).abs() < EPS);
        assert!(contrast_ratio(a, b) > 1.0);
    }

    #[test]
    fn test_perceived_brightness() {
        assert!((perceived_brightness(Rgb::WHITE) - 255.0).abs() < 1e-6);
        assert!(perceived_brightness(Rgb::BLACK).abs() < EPS);
    }
}
