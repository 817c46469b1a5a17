//! TrueShade Core - Shared types library.
//!
//! This crate provides common types used across all TrueShade components:
//! - `storefront` - Catalog, cart, color analysis, and camera sampling engine
//! - `cli` - Command-line front end for the storefront engine
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no persistence,
//! no device access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, colors, and preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
