//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type plus the [`Notice`] shown to the shopper
//! when an operation fails. Frontends should call [`AppError::report`] and then
//! display [`AppError::notice`].

use std::fmt;

use thiserror::Error;
use trueshade_core::ColorError;

use crate::config::ConfigError;
use crate::persistence::PersistenceError;

/// A short, non-blocking message for the shopper.
///
/// Notices replace the blocking alert dialogs of a browser storefront; they
/// carry no severity and never interrupt the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Saving or loading persisted state failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A color string could not be parsed.
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Bad input from the shopper.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether this error indicates a fault worth sending to Sentry.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Persistence(_) | Self::Config(_))
    }

    /// Log the error, capturing internal faults to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        } else {
            tracing::debug!(error = %self, "Storefront error");
        }
    }

    /// The shopper-facing message.
    ///
    /// Internal details are never exposed.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Persistence(_) => Notice::new("Your changes could not be saved."),
            Self::Config(_) => Notice::new("Storefront is misconfigured."),
            Self::Color(_) => Notice::new("That doesn't look like a color."),
            Self::BadRequest(msg) => Notice::new(msg.clone()),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for shopper actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "p1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
