//! Application settings

use serde::{Deserialize, Serialize};

use crate::i18n::Lang;

/// How many wizard steps the customizer walks through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardVariant {
    /// Base → Height → Color → Filling → Toppings
    #[default]
    Full,
    /// Base → Height → Color
    Simple,
}

impl WizardVariant {
    pub fn step_count(&self) -> u8 {
        match self {
            WizardVariant::Full => 5,
            WizardVariant::Simple => 3,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardVariant::Full => "Full",
            WizardVariant::Simple => "Simple",
        }
    }

    pub fn all() -> &'static [WizardVariant] {
        &[WizardVariant::Full, WizardVariant::Simple]
    }
}

/// How base color changes reach the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Rebuild the base with the new color right away
    #[default]
    Instant,
    /// Drop an icing disc and fade the color over several frames
    Animated,
}

impl ColorMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorMode::Instant => "Instant",
            ColorMode::Animated => "Animated",
        }
    }

    pub fn all() -> &'static [ColorMode] {
        &[ColorMode::Instant, ColorMode::Animated]
    }
}

/// Behavior switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSettings {
    pub variant: WizardVariant,
    pub color_mode: ColorMode,
}

/// Camera permission and readiness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Answer given by the desktop permission stand-in
    pub grant_access: bool,
    /// Treat the feed as ready after this many milliseconds
    pub ready_fallback_ms: u64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            grant_access: true,
            ready_fallback_ms: 1200,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
    #[serde(default)]
    pub language: Lang,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            language: Lang::default(),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub features: FeatureSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub ui: UiSettings,
    /// Fixed seed for topping and drip placement; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AppSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "cake-ar", "cake-ar")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!("Invalid settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Cannot create config dir {}: {e}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Cannot write settings {}: {e}", path.display());
                }
            }
            Err(e) => tracing::warn!("Cannot serialize settings: {e}"),
        }
    }
}
