//! Gallery configuration.
//!
//! Handles loading, validating, and merging `gallery.toml`. Stock defaults are
//! overridden by whatever the user file specifies; every key is optional.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Projects"
//! error_message = "Error loading gallery. Please refresh the page."
//!
//! [slideshow]
//! autoplay_interval_ms = 3000  # Time between automatic advances
//! start_delay_ms = 10          # Delay before a staged slide starts moving
//! transition_ms = 400          # Slide animation duration
//! settle_ms = 450              # Time from slide start until the card is idle again
//!
//! [theme]
//! card_gap = "2rem"            # Gap between cards
//! grid_padding = "2rem"        # Padding around the card grid
//! card_min_width = "280px"     # Minimum card width in the responsive grid
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"       # Date captions
//! border = "#e0e0e0"
//! dot = "#cccccc"
//! dot_active = "#111111"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! dot = "#555555"
//! dot_active = "#eeeeee"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Message that replaces the gallery when the project list cannot be loaded.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error loading gallery. Please refresh the page.";

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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title and heading.
    pub title: String,
    /// Text shown in place of the gallery when the project list fails to load.
    pub error_message: String,
    /// Slideshow timing.
    pub slideshow: SlideshowSettings,
    /// Grid layout.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            slideshow: SlideshowSettings::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.slideshow;
        if s.autoplay_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "slideshow.autoplay_interval_ms must be non-zero".into(),
            ));
        }
        if s.transition_ms == 0 {
            return Err(ConfigError::Validation(
                "slideshow.transition_ms must be non-zero".into(),
            ));
        }
        if s.settle_ms < s.start_delay_ms + s.transition_ms {
            return Err(ConfigError::Validation(
                "slideshow.settle_ms must cover start_delay_ms + transition_ms".into(),
            ));
        }
        if s.autoplay_interval_ms <= s.settle_ms {
            return Err(ConfigError::Validation(
                "slideshow.autoplay_interval_ms must be longer than settle_ms".into(),
            ));
        }
        if self.error_message.trim().is_empty() {
            return Err(ConfigError::Validation(
                "error_message must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Slideshow timing, shared by every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowSettings {
    pub autoplay_interval_ms: u64,
    pub start_delay_ms: u64,
    pub transition_ms: u64,
    pub settle_ms: u64,
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
            start_delay_ms: 10,
            transition_ms: 400,
            settle_ms: 450,
        }
    }
}

/// Grid layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub card_gap: String,
    pub grid_padding: String,
    pub card_min_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            card_gap: "2rem".to_string(),
            grid_padding: "2rem".to_string(),
            card_min_width: "280px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text (date captions).
    pub text_muted: String,
    pub border: String,
    /// Inactive indicator dot.
    pub dot: String,
    /// Active indicator dot.
    pub dot_active: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            dot: "#cccccc".to_string(),
            dot_active: "#111111".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            dot: "#555555".to_string(),
            dot_active: "#eeeeee".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
}

/// Lay a user `gallery.toml` over the stock defaults.
///
/// Sections such as `[slideshow]` or `[colors.dark]` merge key by key, so a
/// file that sets only `autoplay_interval_ms` keeps the stock timings for
/// everything else. Any other value from the user file wins outright.
pub fn merge_toml(defaults: toml::Value, user: toml::Value) -> toml::Value {
    match (defaults, user) {
        (toml::Value::Table(mut table), toml::Value::Table(user_table)) => {
            for (key, user_val) in user_table {
                let merged = match table.remove(&key) {
                    Some(default_val) => merge_toml(default_val, user_val),
                    None => user_val,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, user) => user,
    }
}

/// Read `gallery.toml` as an untyped TOML value, or `None` when the gallery
/// has no config file.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let value = toml::from_str(&fs::read_to_string(path)?)?;
    Ok(Some(value))
}

/// Load `path` merged over stock defaults, rejecting unknown keys and
/// validating the result. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Project Gallery Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Page title and heading.
title = "Projects"

# Shown in place of the gallery when projects.json cannot be read or parsed.
error_message = "Error loading gallery. Please refresh the page."

# ---------------------------------------------------------------------------
# Slideshow timing (milliseconds)
# ---------------------------------------------------------------------------
[slideshow]
# Time between automatic advances while the pointer is over a card.
autoplay_interval_ms = 3000

# Delay between staging a slide and starting its animation.
start_delay_ms = 10

# Duration of the slide animation.
transition_ms = 400

# Time from staging a slide until the card accepts navigation again.
# Must be at least start_delay_ms + transition_ms.
settle_ms = 450

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
card_gap = "2rem"
grid_padding = "2rem"
card_min_width = "280px"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Date captions
border = "#e0e0e0"
dot = "#cccccc"
dot_active = "#111111"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
dot = "#555555"
dot_active = "#eeeeee"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = |scheme: &ColorScheme, indent: &str| {
        [
            ("bg", &scheme.background),
            ("text", &scheme.text),
            ("text-muted", &scheme.text_muted),
            ("border", &scheme.border),
            ("dot", &scheme.dot),
            ("dot-active", &scheme.dot_active),
        ]
        .iter()
        .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n")
    };
    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        vars(&colors.light, "    "),
        vars(&colors.dark, "        "),
    )
}

/// Generate CSS custom properties from theme and slideshow config.
pub fn generate_theme_css(theme: &ThemeConfig, slideshow: &SlideshowSettings) -> String {
    format!(
        r#":root {{
    --card-gap: {card_gap};
    --grid-padding: {grid_padding};
    --card-min-width: {card_min_width};
    --slide-duration: {slide}ms;
}}"#,
        card_gap = theme.card_gap,
        grid_padding = theme.grid_padding,
        card_min_width = theme.card_min_width,
        slide = slideshow.transition_ms,
    )
}
