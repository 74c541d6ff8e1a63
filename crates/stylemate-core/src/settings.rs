//! Settings domain types and validation.
//!
//! This module contains the user settings used across the application.
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::{
    DEFAULT_TEMPERATURE, Occasion, OutfitPreferences, StylePreference, WeatherCondition,
};

/// Identifier used when no user has been configured.
pub const DEFAULT_USER_ID: &str = "local";

/// Temperature range offered by front ends, in °C.
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<i32> = 0..=40;

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Owner of the wardrobe this installation works with.
    pub user_id: Option<String>,

    /// Temperature used when a request doesn't give one.
    pub default_temperature: Option<i32>,

    /// Style used when a request doesn't give one.
    pub default_style: Option<StylePreference>,

    /// Occasion used when a request doesn't give one.
    pub default_occasion: Option<Occasion>,

    /// Weather condition used when a request doesn't give one.
    pub default_weather: Option<WeatherCondition>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            user_id: Some(DEFAULT_USER_ID.to_string()),
            default_temperature: Some(DEFAULT_TEMPERATURE),
            default_style: Some(StylePreference::default()),
            default_occasion: Some(Occasion::default()),
            default_weather: Some(WeatherCondition::default()),
        }
    }

    /// Get the effective user id (with default fallback).
    #[must_use]
    pub fn effective_user_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or(DEFAULT_USER_ID)
    }

    /// Preferences built from the stored defaults.
    #[must_use]
    pub fn default_preferences(&self) -> OutfitPreferences {
        OutfitPreferences {
            temperature: self.default_temperature.unwrap_or(DEFAULT_TEMPERATURE),
            weather_condition: self.default_weather.unwrap_or_default(),
            occasion: self.default_occasion.unwrap_or_default(),
            occasion_subtype: String::new(),
            style: self.default_style.unwrap_or_default(),
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref user) = other.user_id {
            self.user_id.clone_from(user);
        }
        if let Some(temperature) = other.default_temperature {
            self.default_temperature = temperature;
        }
        if let Some(style) = other.default_style {
            self.default_style = style;
        }
        if let Some(occasion) = other.default_occasion {
            self.default_occasion = occasion;
        }
        if let Some(weather) = other.default_weather {
            self.default_weather = weather;
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub user_id: Option<Option<String>>,
    pub default_temperature: Option<Option<i32>>,
    pub default_style: Option<Option<StylePreference>>,
    pub default_occasion: Option<Option<Occasion>>,
    pub default_weather: Option<Option<WeatherCondition>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Default temperature must be between 0 and 40 °C, got {0}")]
    InvalidTemperature(i32),

    #[error("User id cannot be empty")]
    EmptyUserId,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(t) = settings.default_temperature {
        if !TEMPERATURE_RANGE.contains(&t) {
            return Err(SettingsError::InvalidTemperature(t));
        }
    }

    if settings
        .user_id
        .as_ref()
        .is_some_and(|u| u.trim().is_empty())
    {
        return Err(SettingsError::EmptyUserId);
    }

    Ok(())
}
