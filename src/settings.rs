//! User preferences, passed around as a plain value
//!
//! Stored as JSON. A missing file means defaults; nothing is global.

use crate::error::SettingsError;
use crate::format::DEFAULT_CURRENCY_SYMBOL;
use crate::projection::ProjectionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default settings file name, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "sip_settings.json";

/// Colour scheme preference, persisted as its integer tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Theme {
    /// Follow the system appearance
    System,
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn tag(self) -> i64 {
        match self {
            Theme::System => 0,
            Theme::Light => 1,
            Theme::Dark => 2,
        }
    }

    /// Light and dark swap; following the system switches to dark
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light | Theme::System => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "system" | "0" => Some(Theme::System),
            "light" | "1" => Some(Theme::Light),
            "dark" | "2" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl From<i64> for Theme {
    // Any tag other than 0 or 1 selects dark
    fn from(tag: i64) -> Self {
        match tag {
            0 => Theme::System,
            1 => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

impl From<Theme> for i64 {
    fn from(theme: Theme) -> Self {
        theme.tag()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(name)
    }
}

/// Bounds and step of a slider control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const PERIOD_YEARS: SliderRange = SliderRange { min: 0.0, max: 40.0, step: 1.0 };
    pub const RATE_PERCENT: SliderRange = SliderRange { min: 0.0, max: 30.0, step: 0.1 };

    /// Bounds must be finite with `min <= max`, and the step finite and positive
    pub fn validate(&self, name: &'static str) -> Result<(), SettingsError> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.min <= self.max;
        if !ordered || !self.step.is_finite() || self.step <= 0.0 {
            return Err(SettingsError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Clamp into range and snap to the nearest step from the lower bound.
    ///
    /// Inverted bounds are swapped. Bounds that cannot be ordered (NaN) leave
    /// the value unchanged, as does a non-positive step after clamping.
    pub fn snap(&self, value: f64) -> f64 {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else if self.max < self.min {
            (self.max, self.min)
        } else {
            return value;
        };

        if value.is_nan() {
            return lo;
        }
        let clamped = value.clamp(lo, hi);
        let stepped = self.step.is_finite() && self.step > 0.0;
        if !stepped {
            return clamped;
        }
        let steps = ((clamped - lo) / self.step).round();
        // Round away the representation error of fractional steps such as 0.1
        let snapped = (lo + steps * self.step).min(hi);
        (snapped * 1e9).round() / 1e9
    }
}

/// All persisted preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub preferred_theme: Theme,
    pub currency_symbol: String,
    pub period_slider: SliderRange,
    pub rate_slider: SliderRange,
    pub projection: ProjectionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_theme: Theme::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            period_slider: SliderRange::PERIOD_YEARS,
            rate_slider: SliderRange::RATE_PERCENT,
            projection: ProjectionConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.period_slider.validate("period_slider")?;
        settings.rate_slider.validate("rate_slider")?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }
}
