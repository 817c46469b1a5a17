//! Core types for TrueShade.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod color;
pub mod id;
pub mod preferences;
pub mod price;

pub use color::{ColorError, ColorFamily, HexColor, Rgb, UnknownColorFamily};
pub use id::*;
pub use preferences::{FilterMode, Preferences, UnknownFilterMode};
pub use price::{CurrencyCode, Price, UnknownCurrency};
