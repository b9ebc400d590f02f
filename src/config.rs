//! Storefront configuration module.
//!
//! Handles loading, validating, and merging `store.toml`. Every value has a
//! stock default; a `store.toml` only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! fallback_image = "/placeholder.jpg"   # Shown when a product has no usable image
//!
//! [whatsapp]
//! number = "919876543210"     # Country code + number, digits only
//!
//! [api]
//! base_url = "https://craftology-backend.onrender.com/api"
//!
//! [catalog.items_per_page]
//! envelope = 8
//! coin = 8
//! gaddi = 12
//! resin = 8
//! scrapbook = 12
//!
//! [colors]
//! linen = "#F9F0EB"           # Page background
//! champagne = "#F2E6D8"       # Card and panel background
//! espresso = "#371E10"        # Text and primary buttons
//! gold = "#CD9860"            # Prices and hover accents
//! white = "#FFFFFF"
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only change the order number
//! [whatsapp]
//! number = "919303410393"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::catalog::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "store.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Storefront configuration loaded from `store.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Placeholder image for products with no usable image.
    pub fallback_image: String,
    /// Order and booking deep links.
    pub whatsapp: WhatsappConfig,
    /// Backend the catalog JSON comes from.
    pub api: ApiConfig,
    /// Listing settings.
    pub catalog: CatalogConfig,
    /// Brand palette.
    pub colors: BrandColors,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fallback_image: "/placeholder.jpg".to_string(),
            whatsapp: WhatsappConfig::default(),
            api: ApiConfig::default(),
            catalog: CatalogConfig::default(),
            colors: BrandColors::default(),
        }
    }
}

impl StoreConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_image.trim().is_empty() {
            return Err(ConfigError::Validation(
                "fallback_image must not be empty".into(),
            ));
        }
        let number = &self.whatsapp.number;
        if !(8..=15).contains(&number.len()) || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "whatsapp.number must be 8-15 digits (country code included, no '+')".into(),
            ));
        }
        if let Some(category) = Category::ALL
            .into_iter()
            .find(|&c| self.catalog.items_per_page.get(c) == 0)
        {
            return Err(ConfigError::Validation(format!(
                "catalog.items_per_page.{} must be greater than 0",
                category.slug()
            )));
        }
        Ok(())
    }
}

/// WhatsApp settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WhatsappConfig {
    /// Number in international format without `+`, e.g. `919876543210`.
    pub number: String,
}

impl Default for WhatsappConfig {
    fn default() -> Self {
        Self {
            number: "919876543210".to_string(),
        }
    }
}

/// Backend location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://craftology-backend.onrender.com/api".to_string(),
        }
    }
}

impl ApiConfig {
    /// Endpoint serving a category's product list.
    pub fn endpoint(&self, category: Category) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), category.slug())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub items_per_page: PageSizes,
}

/// Products per listing page, per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSizes {
    pub envelope: usize,
    pub coin: usize,
    pub gaddi: usize,
    pub resin: usize,
    pub scrapbook: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            envelope: 8,
            coin: 8,
            gaddi: 12,
            resin: 8,
            scrapbook: 12,
        }
    }
}

impl PageSizes {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Envelope => self.envelope,
            Category::Coin => self.coin,
            Category::Gaddi => self.gaddi,
            Category::Resin => self.resin,
            Category::Scrapbook => self.scrapbook,
        }
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandColors {
    /// Page background.
    pub linen: String,
    /// Card and panel background.
    pub champagne: String,
    /// Text and primary buttons.
    pub espresso: String,
    /// Prices and hover accents.
    pub gold: String,
    pub white: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            linen: "#F9F0EB".to_string(),
            champagne: "#F2E6D8".to_string(),
            espresso: "#371E10".to_string(),
            gold: "#CD9860".to_string(),
            white: "#FFFFFF".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(StoreConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Load `store.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<StoreConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: StoreConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `store.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(dir: &Path) -> Result<StoreConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE}, using stock defaults");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `store.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Craftology Storefront Configuration
# ===================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Image shown when a product has no usable image URL.
fallback_image = "/placeholder.jpg"

# ---------------------------------------------------------------------------
# WhatsApp ordering
# ---------------------------------------------------------------------------
[whatsapp]
# International format, digits only (country code first, no '+').
number = "919876543210"

# ---------------------------------------------------------------------------
# Backend
# ---------------------------------------------------------------------------
[api]
# Category endpoints live under this URL: <base_url>/envelope, <base_url>/coin, ...
base_url = "https://craftology-backend.onrender.com/api"

# ---------------------------------------------------------------------------
# Listings
# ---------------------------------------------------------------------------
[catalog.items_per_page]
envelope = 8
coin = 8
gaddi = 12
resin = 8
scrapbook = 12

# ---------------------------------------------------------------------------
# Brand colors
# ---------------------------------------------------------------------------
[colors]
linen = "#F9F0EB"       # Page background
champagne = "#F2E6D8"   # Card and panel background
espresso = "#371E10"    # Text and primary buttons
gold = "#CD9860"        # Prices and hover accents
white = "#FFFFFF"
"##
}

/// Generate CSS custom properties from the brand palette.
pub fn generate_color_css(colors: &BrandColors) -> String {
    format!(
        r#":root {{
    --color-linen: {linen};
    --color-champagne: {champagne};
    --color-espresso: {espresso};
    --color-gold: {gold};
    --color-white: {white};
}}"#,
        linen = colors.linen,
        champagne = colors.champagne,
        espresso = colors.espresso,
        gold = colors.gold,
        white = colors.white,
    )
}
