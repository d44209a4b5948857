// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and default theme
//! - `[scroll]` - Scroll thresholds, anchor offset, smoothing and parallax
//! - `[notifications]` - Toast timings
//! - `[form]` - Contact form submission delay
//! - `[effects]` - Cursor follower, loading screen and reveal tuning
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use vitrine::config;
//! use vitrine::domain::ThemeMode;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.theme = ThemeMode::Dark;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::scroll::ScrollThresholds;
use crate::domain::{DelayMs, Smoothing, ThemeMode};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "tr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme applied when nothing has been stored yet.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme: ThemeMode,
}

/// Scroll-driven behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub header_scrolled_px: f64,
    pub navbar_scrolled_px: f64,
    pub hide_guard_px: f64,
    pub section_margin_px: f64,
    pub anchor_offset_px: f64,
    pub smooth_lerp: f64,
    pub parallax_speed_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_scrolled_px: DEFAULT_HEADER_SCROLLED_PX,
            navbar_scrolled_px: DEFAULT_NAVBAR_SCROLLED_PX,
            hide_guard_px: DEFAULT_HIDE_GUARD_PX,
            section_margin_px: DEFAULT_SECTION_MARGIN_PX,
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
            smooth_lerp: DEFAULT_SMOOTH_LERP,
            parallax_speed_step: DEFAULT_PARALLAX_SPEED_STEP,
        }
    }
}

impl ScrollConfig {
    /// Thresholds for the navbar (`#navbar`).
    #[must_use]
    pub fn navbar_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            scrolled_px: self.navbar_scrolled_px,
            hide_guard_px: self.hide_guard_px,
            section_margin_px: self.section_margin_px,
        }
    }

    /// Thresholds for the lightweight site header (`.site-header`).
    #[must_use]
    pub fn header_thresholds(&self) -> ScrollThresholds {
        ScrollThresholds {
            scrolled_px: self.header_scrolled_px,
            ..self.navbar_thresholds()
        }
    }

    #[must_use]
    pub fn smoothing(&self) -> Smoothing {
        Smoothing::new(self.smooth_lerp)
    }
}

/// Toast notification timings, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub display_ms: u64,
    pub enter_delay_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_NOTIFICATION_DISPLAY_MS,
            enter_delay_ms: DEFAULT_NOTIFICATION_ENTER_DELAY_MS,
            exit_ms: DEFAULT_NOTIFICATION_EXIT_MS,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn display(&self) -> Duration {
        DelayMs::new(self.display_ms).as_duration()
    }

    #[must_use]
    pub fn enter_delay(&self) -> Duration {
        DelayMs::new(self.enter_delay_ms).as_duration()
    }

    #[must_use]
    pub fn exit(&self) -> Duration {
        DelayMs::new(self.exit_ms).as_duration()
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        DelayMs::new(self.submit_delay_ms).as_duration()
    }
}

/// Visual effect tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub cursor_lerp: f64,
    pub loading_delay_ms: u64,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin_px: f64,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            cursor_lerp: DEFAULT_CURSOR_LERP,
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl EffectsConfig {
    #[must_use]
    pub fn cursor_smoothing(&self) -> Smoothing {
        Smoothing::new(self.cursor_lerp)
    }

    #[must_use]
    pub fn loading_delay(&self) -> Duration {
        DelayMs::new(self.loading_delay_ms).as_duration()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub effects: EffectsConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "using default configuration");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Loads and parses a configuration file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no configuration directory available".into()))?;
    save_to_path(config, &path)
}

/// Writes a configuration file, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
