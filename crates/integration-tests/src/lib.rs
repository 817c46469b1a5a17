//! Integration tests for TrueShade.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p trueshade-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - Cart, wishlist, filters, and recommendations through `AppState`
//! - `persistence` - State surviving a restart through `JsonFileStore`
//! - `camera_sampling` - Sampler sessions against fake and still-image cameras

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use trueshade_core::{CurrencyCode, Rgb};
use trueshade_storefront::AppState;
use trueshade_storefront::persistence::{JsonFileStore, KeyValueStore};

/// A storefront backed by a JSON file in a temporary directory.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("trueshade.json")
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Open a fresh store over the data file, as a new process would.
    ///
    /// # Panics
    ///
    /// Panics if the data file exists but cannot be read.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(JsonFileStore::open(self.data_file()).expect("data file unreadable"))
    }

    /// Start a storefront session over the data file.
    #[must_use]
    pub fn session(&self) -> AppState {
        AppState::new(self.store(), CurrencyCode::USD)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a solid-color RGB PNG.
///
/// # Panics
///
/// Panics if encoding fails.
#[must_use]
#[allow(clippy::expect_used)]
pub fn solid_png(width: u32, height: u32, rgb: Rgb) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        let pixels = rgb.channels().repeat((width as usize) * (height as usize));
        writer.write_image_data(&pixels).expect("png data");
    }
    out
}
