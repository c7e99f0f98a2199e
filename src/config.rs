//! User configuration loading from `<config dir>/slidein/config.json`.
//!
//! Every field has a default, so a partial (or missing) file is fine.

use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::ui::search_bar::Easing;
use crate::ui::theme::{self, LightTheme};

const CONFIG_DIR: &str = "slidein";
const CONFIG_FILE: &str = "config.json";

/// Host application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub placeholder: String,
    pub search_bar: SearchBarConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder: String::from("App Library"),
            search_bar: SearchBarConfig::default(),
        }
    }
}

/// Search bar behavior and appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchBarConfig {
    /// Reveal a cancel control while editing
    pub show_cancel: bool,
    pub cancel_label: String,
    pub cancel_width: f32,
    pub animation_ms: u64,
    pub cancel_animation_ms: u64,
    pub easing: Easing,
    pub appearance: Appearance,
}

impl Default for SearchBarConfig {
    fn default() -> Self {
        Self {
            show_cancel: false,
            cancel_label: String::from("Cancel"),
            cancel_width: 64.0,
            animation_ms: 250,
            cancel_animation_ms: 300,
            easing: Easing::EaseInOut,
            appearance: Appearance::default(),
        }
    }
}

impl SearchBarConfig {
    /// Same configuration with the cancel control enabled.
    pub fn with_cancel(mut self) -> Self {
        self.show_cancel = true;
        self
    }

    /// Width of the cancel control, `None` when it is disabled.
    pub fn cancel_width(&self) -> Option<f32> {
        self.show_cancel.then_some(self.cancel_width)
    }

    pub fn focus_duration(&self) -> Duration {
        if self.show_cancel {
            Duration::from_millis(self.cancel_animation_ms)
        } else {
            Duration::from_millis(self.animation_ms)
        }
    }

    pub fn cancel_duration(&self) -> Duration {
        Duration::from_millis(self.cancel_animation_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.show_cancel && self.cancel_width <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cancel_width must be positive, got {}",
                self.cancel_width
            )));
        }
        if self.animation_ms == 0 || self.cancel_animation_ms == 0 {
            return Err(Error::InvalidConfig(
                "animation durations must be non-zero".to_string(),
            ));
        }
        self.appearance.validate()
    }
}

/// Colors and metrics of the bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub corner_radius: f32,
    pub font_size: f32,
    pub icon_size: f32,
    pub background: String,
    pub placeholder: String,
    pub icon: String,
    pub clear: String,
    pub text: String,
    pub cancel: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            font_size: 17.0,
            icon_size: 20.0,
            background: theme::to_hex(LightTheme::BACKGROUND),
            placeholder: theme::to_hex(LightTheme::TEXT_MUTED),
            icon: theme::to_hex(LightTheme::TEXT_MUTED),
            clear: theme::to_hex(LightTheme::CONTROL),
            text: theme::to_hex(LightTheme::TEXT),
            cancel: theme::to_hex(LightTheme::PRIMARY),
        }
    }
}

/// Appearance with colors resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub placeholder: Color,
    pub icon: Color,
    pub clear: Color,
    pub text: Color,
    pub cancel: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: LightTheme::BACKGROUND,
            placeholder: LightTheme::TEXT_MUTED,
            icon: LightTheme::TEXT_MUTED,
            clear: LightTheme::CONTROL,
            text: LightTheme::TEXT,
            cancel: LightTheme::PRIMARY,
        }
    }
}

impl Appearance {
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            background: theme::parse_hex(&self.background)?,
            placeholder: theme::parse_hex(&self.placeholder)?,
            icon: theme::parse_hex(&self.icon)?,
            clear: theme::parse_hex(&self.clear)?,
            text: theme::parse_hex(&self.text)?,
            cancel: theme::parse_hex(&self.cancel)?,
        })
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("corner_radius", self.corner_radius),
            ("font_size", self.font_size),
            ("icon_size", self.icon_size),
        ] {
            if !(value > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        self.palette().map(|_| ())
    }
}

/// Default config location, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Parse and validate a config document.
pub fn parse(content: &str, path: &Path) -> Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.search_bar.validate()?;
    Ok(config)
}

/// Load the config at `path`; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig> {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(AppConfig::default())
        }
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load from `path` or the default location, falling back to defaults on error.
pub fn load_or_default(path: Option<&Path>) -> AppConfig {
    let path = match path.map(Path::to_path_buf).or_else(default_path) {
        Some(path) => path,
        None => return AppConfig::default(),
    };

    match load(&path) {
        Ok(config) => {
            tracing::info!("Using config at {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("{} (using defaults)", e);
            AppConfig::default()
        }
    }
}
