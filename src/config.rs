//! Gallery configuration.
//!
//! Handles loading, validating, and merging `gallery.toml`. Stock defaults
//! are the base layer; a user file only needs the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! default_title = "Gallery"  # Used when the payload has no title
//!
//! [lightbox]
//! close_delay_ms = 170       # Fade-out time before the overlay is hidden
//! preload_neighbors = true   # Fetch previous/next images ahead of time
//!
//! [gestures]
//! swipe_threshold_px = 50.0  # Minimum horizontal travel for a swipe
//!
//! [labels]
//! dialog = "Image viewer"
//! close = "Close"
//! previous = "Previous image"
//! next = "Next image"
//!
//! [nav]
//! breakpoint_px = 1300       # Mobile menu is only available at or below this width
//!
//! [[nav.sections]]
//! prefix = "/galleries/"
//! target = "/galleries/galleries.html"
//!
//! [contact]
//! recipient = "contacts@example.com"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Title used when the embedded payload does not carry one.
    pub default_title: String,
    pub lightbox: LightboxConfig,
    pub gestures: GestureConfig,
    pub labels: LabelsConfig,
    pub nav: NavConfig,
    pub contact: ContactConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_title: "Gallery".to_string(),
            lightbox: LightboxConfig::default(),
            gestures: GestureConfig::default(),
            labels: LabelsConfig::default(),
            nav: NavConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_title must not be empty".into(),
            ));
        }
        if self.lightbox.close_delay_ms > MAX_CLOSE_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "lightbox.close_delay_ms must be at most {MAX_CLOSE_DELAY_MS}"
            )));
        }
        let threshold = self.gestures.swipe_threshold_px;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::Validation(
                "gestures.swipe_threshold_px must be a positive number".into(),
            ));
        }
        if self.nav.breakpoint_px == 0 {
            return Err(ConfigError::Validation(
                "nav.breakpoint_px must be non-zero".into(),
            ));
        }
        if let Some(bad) = self.nav.sections.iter().find(|s| !s.prefix.starts_with('/')) {
            return Err(ConfigError::Validation(format!(
                "nav.sections prefix '{}' must start with '/'",
                bad.prefix
            )));
        }
        if !self.contact.recipient.contains('@') {
            return Err(ConfigError::Validation(
                "contact.recipient must be an email address".into(),
            ));
        }
        Ok(())
    }
}

const MAX_CLOSE_DELAY_MS: u64 = 5000;

/// Overlay timing and preloading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightboxConfig {
    /// Delay between starting the fade-out and hiding the overlay.
    pub close_delay_ms: u64,
    /// Preload the previous and next images whenever a slide is shown.
    pub preload_neighbors: bool,
}

impl LightboxConfig {
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 170,
            preload_neighbors: true,
        }
    }
}

/// Touch gesture recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Horizontal travel (CSS px) a swipe must exceed.
    pub swipe_threshold_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50.0,
        }
    }
}

/// Accessible labels for the overlay controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    pub dialog: String,
    pub close: String,
    pub previous: String,
    pub next: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            dialog: "Image viewer".to_string(),
            close: "Close".to_string(),
            previous: "Previous image".to_string(),
            next: "Next image".to_string(),
        }
    }
}

/// Site navigation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Widest viewport (CSS px) that still shows the mobile menu.
    pub breakpoint_px: u32,
    /// Sections whose sub-pages highlight the section landing page.
    pub sections: Vec<SectionRule>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 1300,
            sections: vec![
                SectionRule::new("/galleries/", "/galleries/galleries.html"),
                SectionRule::new("/services/", "/services/services.html"),
            ],
        }
    }
}

/// Maps every page under `prefix` to the nav link for `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionRule {
    pub prefix: String,
    pub target: String,
}

impl SectionRule {
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
        }
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Address the generated `mailto:` link is sent to.
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "contacts@example.com".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `gallery.toml` file.
///
/// A missing file yields the stock defaults; a present but invalid file is an error.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// A documented stock `gallery.toml`, printed by `gallery-lightbox gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-lightbox configuration
# All options are optional; uncomment to override the defaults.
# Unknown keys will cause an error.

# Title shown in the lightbox when the gallery payload has none.
# default_title = "Gallery"

[lightbox]
# Milliseconds between starting the fade-out and hiding the overlay.
# Should match the CSS transition on .gallery-modal.
# close_delay_ms = 170
# Preload the previous and next image whenever a slide is shown.
# preload_neighbors = true

[gestures]
# Minimum horizontal travel in CSS pixels for a swipe. The travel must
# also be larger than the vertical drift.
# swipe_threshold_px = 50.0

[labels]
# dialog = "Image viewer"
# close = "Close"
# previous = "Previous image"
# next = "Next image"

[nav]
# Widest viewport (CSS px) that still uses the mobile menu.
# Must match the CSS media query.
# breakpoint_px = 1300

# Pages under a section prefix highlight the section landing page.
# [[nav.sections]]
# prefix = "/galleries/"
# target = "/galleries/galleries.html"

[contact]
# recipient = "contacts@example.com"
"##
}
