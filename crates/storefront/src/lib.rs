//! TrueShade storefront engine.
//!
//! Color analysis for colorblind shoppers (hue naming, WCAG contrast
//! guidance, vision simulation) plus the cart, wishlist, filtering,
//! recommendation, and preference state behind a storefront surface.
//!
//! Rendering is left to the frontend. State lives in [`state::AppState`],
//! which persists through an injected [`persistence::KeyValueStore`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod camera;
pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod filters;
pub mod persistence;
pub mod prefs;
pub mod recommend;
pub mod state;

pub use error::{AppError, Notice, Result};
pub use state::AppState;
