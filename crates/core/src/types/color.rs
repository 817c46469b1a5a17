//! Color value types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input string is empty.
    #[error("color cannot be empty")]
    Empty,
    /// The input does not have exactly six hex digits.
    #[error("color must have 6 hex digits (got {0})")]
    InvalidLength(usize),
    /// The input contains a non-hex character.
    #[error("invalid hex digit in color: {0}")]
    InvalidDigit(String),
}

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array, in `[r, g, b]` order.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build from wide integers, clamping each channel into `0..=255`.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

fn clamp_channel(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

/// A `#rrggbb` color string.
///
/// Parsing accepts an optional leading `#` and either case; the stored form is
/// always lowercase with the `#` prefix.
///
/// ```
/// use trueshade_core::{HexColor, Rgb};
///
/// let color = HexColor::parse("#6AE3FF").unwrap();
/// assert_eq!(color.as_str(), "#6ae3ff");
/// assert_eq!(color.rgb(), Rgb::new(0x6a, 0xe3, 0xff));
/// assert!(HexColor::parse("#fff").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse a `HexColor` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not six hex digits long
    /// (ignoring a leading `#`), or contains a non-hex character.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(digits.len()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(s.to_owned()));
        }

        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Returns the color as a `#rrggbb` string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the channels.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        let value = u32::from_str_radix(self.0.trim_start_matches('#'), 16).unwrap_or(0);
        let [_, r, g, b] = value.to_be_bytes();
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Coarse color bucket assigned to each catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFamily {
    Cool,
    Warm,
    Neutral,
}

impl ColorFamily {
    /// All families, in display order.
    pub const ALL: [Self; 3] = [Self::Cool, Self::Warm, Self::Neutral];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a color family name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color family: {0} (expected cool, warm, or neutral)")]
pub struct UnknownColorFamily(pub String);

impl FromStr for ColorFamily {
    type Err = UnknownColorFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cool" => Ok(Self::Cool),
            "warm" => Ok(Self::Warm),
            "neutral" => Ok(Self::Neutral),
            _ => Err(UnknownColorFamily(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_colors() {
        assert!(HexColor::parse("#ff7a4a").is_ok());
        assert!(HexColor::parse("1EB5A1").is_ok());
        assert_eq!(HexColor::parse(" #E6EBFF ").unwrap().as_str(), "#e6ebff");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(HexColor::parse(""), Err(ColorError::Empty));
        assert_eq!(HexColor::parse("   "), Err(ColorError::Empty));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(HexColor::parse("#fff"), Err(ColorError::InvalidLength(3)));
        assert_eq!(
            HexColor::parse("#ff00ff00"),
            Err(ColorError::InvalidLength(8))
        );
    }

    #[test]
    fn test_parse_bad_digit() {
        assert!(matches!(
            HexColor::parse("#gg0000"),
            Err(ColorError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_rgb_decoding() {
        let color = HexColor::parse("#2f3645").unwrap();
        assert_eq!(color.rgb(), Rgb::new(0x2f, 0x36, 0x45));
    }

    #[test]
    fn test_from_rgb_pads_channels() {
        assert_eq!(HexColor::from(Rgb::new(1, 2, 255)).as_str(), "#0102ff");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Rgb::clamped(-40, 128, 900), Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let ok: Result<HexColor, _> = serde_json::from_str(r##""#ff0000""##);
        assert!(ok.is_ok());
        let bad: Result<HexColor, _> = serde_json::from_str(r#""red""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_color_family_round_trip_names() {
        for family in ColorFamily::ALL {
            assert_eq!(family.as_str().parse::<ColorFamily>().unwrap(), family);
        }
        assert_eq!(
            serde_json::to_string(&ColorFamily::Cool).unwrap(),
            r#""cool""#
        );
        assert!("teal".parse::<ColorFamily>().is_err());
    }
}
