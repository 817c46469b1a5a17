//! Accessibility preference types.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colorblind simulation filter applied to the whole storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    None,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl FilterMode {
    /// All available modes for the filter picker.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "No Filter",
            Self::Protanopia => "Protanopia",
            Self::Deuteranopia => "Deuteranopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Short description of what the filter simulates.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::None => "Natural colors",
            Self::Protanopia => "Red sensitivity reduced",
            Self::Deuteranopia => "Green sensitivity reduced",
            Self::Tritanopia => "Blue sensitivity reduced",
            Self::Achromatopsia => "No color perception",
        }
    }

    /// Serialized name, as stored in preferences.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a filter mode name is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter mode: {0}")]
pub struct UnknownFilterMode(pub String);

impl FromStr for FilterMode {
    type Err = UnknownFilterMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| UnknownFilterMode(s.to_owned()))
    }
}

/// Persisted accessibility preferences.
///
/// Missing fields fall back to their defaults so older or partial blobs
/// still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub filter: FilterMode,
    pub high_contrast: bool,
    pub large_text: bool,
}
