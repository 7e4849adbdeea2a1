//! Factory functions for selections and settings used in tests, scripts and
//! the command protocol.

use shared::*;

use crate::state::{AppSettings, ColorMode, WizardVariant};

/// Seed used by the headless harness
pub const TEST_SEED: u64 = 42;

// ── Selection factories ─────────────────────────────────────────

/// Circle cake of the given height, default color, nothing else.
pub fn circle_selection(inches: u8) -> Selection {
    Selection {
        shape: Some(CakeShape::Circle),
        height: HeightInches::new(inches).ok(),
        ..Selection::default()
    }
}

/// Circle cake with a filling and up to two toppings.
pub fn decorated_selection(filling: HexColor, toppings: &[&str]) -> Selection {
    let mut selection = Selection {
        filling_color: Some(filling),
        ..circle_selection(HeightInches::BASELINE)
    };
    for tag in toppings {
        selection.toppings.push(*tag);
    }
    selection
}

/// Parse a selection from JSON.
pub fn selection_from_json(json: &str) -> Result<Selection, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid selection JSON: {e}"))
}

// ── Settings factories ──────────────────────────────────────────

/// Settings with a fixed seed and the given feature switches.
pub fn settings(variant: WizardVariant, color_mode: ColorMode) -> AppSettings {
    let mut settings = AppSettings::default();
    settings.features.variant = variant;
    settings.features.color_mode = color_mode;
    settings.seed = Some(TEST_SEED);
    settings
}

/// Default feature switches with a fixed seed.
pub fn seeded_settings() -> AppSettings {
    settings(WizardVariant::Full, ColorMode::Instant)
}
